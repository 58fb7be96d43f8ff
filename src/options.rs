use crate::grid::Orientation;
use crate::palette::Palette;
use std::str::FromStr;
use thiserror::Error;

/// How numbers written inside cells are formatted
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ValueFormat {
    /// No decimal places
    #[default]
    Int,
    /// One decimal place
    Decimal,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Int => format!("{value:.0}"),
            ValueFormat::Decimal => format!("{value:.1}"),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("value format must be \"int\" or \"decimal\", not {0:?}")]
pub struct ParseValueFormatError(pub String);

impl FromStr for ValueFormat {
    type Err = ParseValueFormatError;

    fn from_str(s: &str) -> Result<ValueFormat, ParseValueFormatError> {
        match s {
            "int" => Ok(ValueFormat::Int),
            "decimal" => Ok(ValueFormat::Decimal),
            _ => Err(ParseValueFormatError(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum OptionsError {
    #[error("at most one of value labels and date labels may be enabled")]
    ConflictingLabels,
    #[error("a calendar needs at least one column")]
    ZeroColumns,
}

/// What to draw and how.  Start from [`PlotOptions::default()`] and adjust
/// with the builder methods.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub orientation: Orientation,
    pub palette: Palette,
    /// Write each cell's value inside it
    pub value_label: bool,
    /// Write each cell's day of the month inside it
    pub date_label: bool,
    pub weekday_label: bool,
    pub month_label: bool,
    pub year_label: bool,
    /// Outline the cells of each month
    pub month_grid: bool,
    pub colorbar: bool,
    /// Draw a border around the plot
    pub frame: bool,
    pub value_format: ValueFormat,
    /// Format of the colorbar's end labels; `None` means `value_format`
    pub colorbar_format: Option<ValueFormat>,
    pub title: Option<String>,
    pub cmin: Option<f64>,
    pub cmax: Option<f64>,
    /// Pad single-month grids to six weeks
    pub cal_mode: bool,
}

impl Default for PlotOptions {
    fn default() -> PlotOptions {
        PlotOptions {
            orientation: Orientation::Vertical,
            palette: Palette::default(),
            value_label: false,
            date_label: false,
            weekday_label: true,
            month_label: true,
            year_label: true,
            month_grid: false,
            colorbar: false,
            frame: false,
            value_format: ValueFormat::Int,
            colorbar_format: None,
            title: None,
            cmin: None,
            cmax: None,
            cal_mode: true,
        }
    }
}

impl PlotOptions {
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn value_label(mut self, yes: bool) -> Self {
        self.value_label = yes;
        self
    }

    pub fn date_label(mut self, yes: bool) -> Self {
        self.date_label = yes;
        self
    }

    pub fn month_grid(mut self, yes: bool) -> Self {
        self.month_grid = yes;
        self
    }

    pub fn colorbar(mut self, yes: bool) -> Self {
        self.colorbar = yes;
        self
    }

    pub fn value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    pub fn colorbar_format(mut self, format: ValueFormat) -> Self {
        self.colorbar_format = Some(format);
        self
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn color_limits(mut self, cmin: Option<f64>, cmax: Option<f64>) -> Self {
        self.cmin = cmin;
        self.cmax = cmax;
        self
    }

    /// Check for mutually exclusive settings
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ConflictingLabels`] if both value and date
    /// labels are enabled.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.value_label && self.date_label {
            Err(OptionsError::ConflictingLabels)
        } else {
            Ok(())
        }
    }

    /// The format used for the colorbar's labels
    pub fn resolved_colorbar_format(&self) -> ValueFormat {
        self.colorbar_format.unwrap_or(self.value_format)
    }

    /// The color scale limits, taking unset limits from `data_range`
    pub fn color_range(&self, data_range: Option<(f64, f64)>) -> (f64, f64) {
        let (lo, hi) = data_range.unwrap_or((0.0, 0.0));
        (self.cmin.unwrap_or(lo), self.cmax.unwrap_or(hi))
    }
}
