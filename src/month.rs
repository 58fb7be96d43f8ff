//! Restricting a series to a single calendar month
use crate::dates::{date_range, DateInput, DateSeries, DateValue};
use crate::error::PlotError;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use time::{util::is_leap_year, Date, Month};
use tracing::debug;

/// Number of weeks a month grid is padded to so that month blocks line up
/// when tiled
pub const CAL_MODE_WEEKS: usize = 6;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MonthError {
    #[error("{month} occurs in more than one year ({years:?}); narrow the date range to one year")]
    Ambiguous { month: Month, years: Vec<i32> },
    #[error("no dates fall in {month}")]
    NoData { month: Month },
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        _ => 31,
    }
}

/// Cut `series` down to the days of `month` (by default, the month of its
/// first date), filling in any days of the month missing from the series
/// with zero.
///
/// # Errors
///
/// Fails if the month occurs in more than one year of the series, or not at
/// all.
pub fn extract_month(series: &DateSeries, month: Option<Month>) -> Result<DateSeries, MonthError> {
    let month = month.unwrap_or_else(|| series.first().month());
    let days = series
        .iter()
        .filter(|dv| dv.month() == month)
        .copied()
        .collect::<Vec<_>>();
    let years = days.iter().map(DateValue::year).collect::<BTreeSet<_>>();
    let year = match years.len() {
        0 => return Err(MonthError::NoData { month }),
        1 => days[0].year(),
        _ => {
            return Err(MonthError::Ambiguous {
                month,
                years: years.into_iter().collect(),
            })
        }
    };
    let length = days_in_month(year, month);
    if days.len() == usize::from(length) {
        return Ok(DateSeries::from_contiguous(days));
    }
    debug!(
        year,
        %month,
        present = days.len(),
        length,
        "Padding partial month"
    );
    let first = Date::from_calendar_date(year, month, 1)
        .expect("first of a month containing a valid date should be valid");
    let last = Date::from_calendar_date(year, month, length)
        .expect("last of a month containing a valid date should be valid");
    let values = days
        .into_iter()
        .map(|dv| (dv.date, dv.value))
        .collect::<BTreeMap<_, _>>();
    Ok(DateSeries::from_contiguous(
        date_range(first, last)
            .into_iter()
            .map(|date| DateValue::new(date, values.get(&date).copied().unwrap_or(0.0)))
            .collect(),
    ))
}

/// Normalize `dates` and `values`, then apply [`extract_month()`]
///
/// # Errors
///
/// Fails if normalization or extraction fails.
pub fn preprocess_month<D, V>(
    dates: D,
    values: V,
    month: Option<Month>,
) -> Result<DateSeries, PlotError>
where
    D: IntoIterator,
    D::Item: Into<DateInput>,
    V: IntoIterator<Item = f64>,
{
    let series = DateSeries::normalize(dates, values)?;
    Ok(extract_month(&series, month)?)
}
