use crate::dates::NormalizeError;
use crate::month::MonthError;
use crate::options::OptionsError;
use crate::outline::EmptyOutlineError;
use thiserror::Error;

/// Any error that can occur while laying out a plot
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Month(#[from] MonthError),
    #[error(transparent)]
    Outline(#[from] EmptyOutlineError),
}
