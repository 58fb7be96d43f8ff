//! Coercion of loosely-typed date/value pairs into a gap-free, sorted
//! [`DateSeries`].
use std::collections::BTreeMap;
use std::iter::successors;
use thiserror::Error;
use time::{macros::format_description, Date, Month, OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

/// A date as supplied by a caller, before normalization
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DateInput {
    /// A date written as `YYYY-MM-DD`
    Text(String),
    Date(Date),
    /// A datetime; only its date component is kept
    DateTime(PrimitiveDateTime),
    /// A datetime with an offset; the date is taken in that offset
    OffsetDateTime(OffsetDateTime),
}

impl DateInput {
    /// Convert to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidDate`] if a `Text` input is not of the
    /// form `YYYY-MM-DD`.
    pub fn to_date(&self) -> Result<Date, NormalizeError> {
        match self {
            DateInput::Text(s) => parse_date(s),
            DateInput::Date(d) => Ok(*d),
            DateInput::DateTime(dt) => Ok(dt.date()),
            DateInput::OffsetDateTime(dt) => Ok(dt.date()),
        }
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> DateInput {
        DateInput::Text(s.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> DateInput {
        DateInput::Text(s)
    }
}

impl From<Date> for DateInput {
    fn from(d: Date) -> DateInput {
        DateInput::Date(d)
    }
}

impl From<PrimitiveDateTime> for DateInput {
    fn from(dt: PrimitiveDateTime) -> DateInput {
        DateInput::DateTime(dt)
    }
}

impl From<OffsetDateTime> for DateInput {
    fn from(dt: OffsetDateTime) -> DateInput {
        DateInput::OffsetDateTime(dt)
    }
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid date {value:?}; expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        source: time::error::Parse,
    },
    #[error("got {dates} dates but {values} values")]
    LengthMismatch { dates: usize, values: usize },
    #[error("no dates were supplied")]
    Empty,
}

/// Parse a single `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidDate`] on malformed input.
pub fn parse_date(s: &str) -> Result<Date, NormalizeError> {
    Date::parse(s, format_description!("[year]-[month]-[day]")).map_err(|source| {
        NormalizeError::InvalidDate {
            value: s.to_owned(),
            source,
        }
    })
}

/// Every date from `start` through `end`, inclusive.  Empty if `start` comes
/// after `end`.
pub fn date_range(start: Date, end: Date) -> Vec<Date> {
    successors(Some(start), |&d| d.next_day())
        .take_while(|&d| d <= end)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateValue {
    pub date: Date,
    pub value: f64,
}

impl DateValue {
    pub fn new(date: Date, value: f64) -> DateValue {
        DateValue { date, value }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn day(&self) -> u8 {
        self.date.day()
    }
}

// Invariant: nonempty, strictly ascending, and with no missing days between
// the first and last entries
#[derive(Clone, Debug, PartialEq)]
pub struct DateSeries(Vec<DateValue>);

impl DateSeries {
    /// Pair up `dates` and `values`, then fill in every date between the
    /// earliest and latest with a value of zero.  When a date occurs more than
    /// once, the last occurrence wins.
    ///
    /// # Errors
    ///
    /// Fails if a date cannot be parsed, if the two inputs differ in length,
    /// or if they are empty.
    pub fn normalize<D, V>(dates: D, values: V) -> Result<DateSeries, NormalizeError>
    where
        D: IntoIterator,
        D::Item: Into<DateInput>,
        V: IntoIterator<Item = f64>,
    {
        let dates = dates
            .into_iter()
            .map(|d| d.into().to_date())
            .collect::<Result<Vec<_>, _>>()?;
        let values = values.into_iter().collect::<Vec<_>>();
        if dates.len() != values.len() {
            return Err(NormalizeError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        DateSeries::from_entries(dates.into_iter().zip(values))
    }

    /// Like [`DateSeries::normalize()`], but for dates that have already been
    /// converted
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Empty`] if `entries` is empty.
    pub fn from_entries<I>(entries: I) -> Result<DateSeries, NormalizeError>
    where
        I: IntoIterator<Item = (Date, f64)>,
    {
        let mut given = 0usize;
        let mut by_date = BTreeMap::new();
        for (date, value) in entries {
            given += 1;
            by_date.insert(date, value);
        }
        let (Some((&start, _)), Some((&end, _))) =
            (by_date.first_key_value(), by_date.last_key_value())
        else {
            return Err(NormalizeError::Empty);
        };
        let days = date_range(start, end)
            .into_iter()
            .map(|date| DateValue::new(date, by_date.get(&date).copied().unwrap_or(0.0)))
            .collect::<Vec<_>>();
        debug!(
            %start,
            %end,
            given,
            unique = by_date.len(),
            days = days.len(),
            "Normalized date series"
        );
        Ok(DateSeries(days))
    }

    // Callers must uphold the type's invariant.
    pub(crate) fn from_contiguous(days: Vec<DateValue>) -> DateSeries {
        debug_assert!(!days.is_empty(), "series should not be empty");
        debug_assert!(
            days.windows(2)
                .all(|w| w[0].date.next_day() == Some(w[1].date)),
            "series should be contiguous"
        );
        DateSeries(days)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Always false, but clippy insists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DateValue] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateValue> {
        self.0.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().map(|dv| dv.date)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|dv| dv.value)
    }

    pub fn first(&self) -> DateValue {
        self.0[0]
    }

    pub fn last(&self) -> DateValue {
        self.0[self.0.len() - 1]
    }

    /// The distinct years spanned, ascending
    pub fn years(&self) -> Vec<i32> {
        let mut years = self.0.iter().map(DateValue::year).collect::<Vec<_>>();
        years.dedup();
        years
    }

    /// The distinct `(year, month)` pairs spanned, in chronological order
    pub fn year_months(&self) -> Vec<(i32, Month)> {
        let mut yms = self
            .0
            .iter()
            .map(|dv| (dv.year(), dv.month()))
            .collect::<Vec<_>>();
        yms.dedup();
        yms
    }

    /// The part of the series falling in the given month of the given year,
    /// if any
    pub fn year_month(&self, year: i32, month: Month) -> Option<DateSeries> {
        let days = self
            .0
            .iter()
            .filter(|dv| dv.year() == year && dv.month() == month)
            .copied()
            .collect::<Vec<_>>();
        (!days.is_empty()).then(|| DateSeries::from_contiguous(days))
    }

    /// The smallest and largest finite values in the series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.values())
    }
}

impl<'a> IntoIterator for &'a DateSeries {
    type Item = &'a DateValue;
    type IntoIter = std::slice::Iter<'a, DateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn finite_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((v.min(lo), v.max(hi))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_fill_gap() {
        let series = DateSeries::normalize(["2023-01-01", "2023-01-03"], [5.0, 7.0]).unwrap();
        assert_eq!(
            series.as_slice(),
            [
                DateValue::new(date!(2023 - 01 - 01), 5.0),
                DateValue::new(date!(2023 - 01 - 02), 0.0),
                DateValue::new(date!(2023 - 01 - 03), 7.0),
            ]
        );
    }

    #[test]
    fn test_single_date() {
        let series = DateSeries::normalize(["2023-06-15"], [3.0]).unwrap();
        assert_eq!(series.as_slice(), [DateValue::new(date!(2023 - 06 - 15), 3.0)]);
    }

    #[test]
    fn test_unsorted_and_duplicates() {
        let series = DateSeries::normalize(
            ["2023-03-05", "2023-03-01", "2023-03-05", "2023-03-03"],
            [1.0, 2.0, 9.0, 4.0],
        )
        .unwrap();
        assert_eq!(
            series.values().collect::<Vec<_>>(),
            [2.0, 0.0, 4.0, 0.0, 9.0]
        );
        assert_eq!(series.first().date, date!(2023 - 03 - 01));
        assert_eq!(series.last().date, date!(2023 - 03 - 05));
    }

    #[test]
    fn test_mixed_inputs() {
        let dates: Vec<DateInput> = vec![
            "2024-02-28".into(),
            date!(2024 - 02 - 29).into(),
            datetime!(2024-03-01 23:59).into(),
            datetime!(2024-03-02 00:30 UTC).into(),
        ];
        let series = DateSeries::normalize(dates, [1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series.last().date, date!(2024 - 03 - 02));
        assert_eq!(series.values().collect::<Vec<_>>(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_range_is_complete() {
        let series = DateSeries::normalize(
            ["2022-12-30", "2023-03-02", "2023-01-15"],
            [1.0, 1.0, 1.0],
        )
        .unwrap();
        assert_eq!(series.len(), 63);
        assert!(series
            .as_slice()
            .windows(2)
            .all(|w| w[0].date.next_day() == Some(w[1].date)));
    }

    #[test]
    fn test_renormalize_is_noop() {
        let series = DateSeries::normalize(
            ["2023-01-30", "2023-02-02", "2023-02-10"],
            [1.0, 2.0, 3.0],
        )
        .unwrap();
        let again = DateSeries::from_entries(series.iter().map(|dv| (dv.date, dv.value))).unwrap();
        assert_eq!(again, series);
    }

    #[test]
    fn test_bad_date() {
        let r = DateSeries::normalize(["2023-01-01", "01/02/2023"], [1.0, 2.0]);
        assert!(matches!(r, Err(NormalizeError::InvalidDate { ref value, .. }) if value == "01/02/2023"));
    }

    #[test]
    fn test_length_mismatch() {
        let r = DateSeries::normalize(["2023-01-01", "2023-01-02"], [1.0]);
        assert!(matches!(
            r,
            Err(NormalizeError::LengthMismatch {
                dates: 2,
                values: 1
            })
        ));
    }

    #[test]
    fn test_empty() {
        let r = DateSeries::normalize(Vec::<&str>::new(), Vec::new());
        assert!(matches!(r, Err(NormalizeError::Empty)));
    }

    #[test]
    fn test_date_range_reversed() {
        assert!(date_range(date!(2023 - 01 - 02), date!(2023 - 01 - 01)).is_empty());
    }

    #[test]
    fn test_year_months() {
        let series = DateSeries::normalize(["2022-12-30", "2023-02-01"], [1.0, 2.0]).unwrap();
        assert_eq!(
            series.year_months(),
            [
                (2022, Month::December),
                (2023, Month::January),
                (2023, Month::February)
            ]
        );
        assert_eq!(series.years(), [2022, 2023]);
        let jan = series.year_month(2023, Month::January).unwrap();
        assert_eq!(jan.len(), 31);
        assert!(series.year_month(2023, Month::March).is_none());
    }
}
