use anyhow::{bail, Context};
use calheat::dates::parse_date;
use std::io;
use std::path::Path;
use time::Date;

/// Dates and values read from the input, in input order
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Records {
    pub(crate) dates: Vec<Date>,
    pub(crate) values: Vec<f64>,
}

impl Records {
    fn push(&mut self, date: Date, value: f64) {
        self.dates.push(date);
        self.values.push(value);
    }
}

/// Read records from the file at `path`, or from standard input if `path` is
/// `None` or `-`
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<Records> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display()))?,
        _ => io::read_to_string(io::stdin().lock()).context("failed to read standard input")?,
    };
    parse_records(&text)
}

/// Parse one `YYYY-MM-DD value` record per line.  The fields may be separated
/// by a comma or by whitespace.  Blank lines and lines starting with `#` are
/// skipped.
pub(crate) fn parse_records(text: &str) -> anyhow::Result<Records> {
    let mut records = Records::default();
    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((date, value)) = line.split_once(|c: char| c == ',' || c.is_whitespace()) else {
            bail!("line {lineno}: expected a date and a value");
        };
        let date = parse_date(date.trim()).with_context(|| format!("line {lineno}"))?;
        let value = value.trim();
        let value = value.strip_prefix(',').map_or(value, str::trim_start);
        let value = value
            .parse::<f64>()
            .with_context(|| format!("line {lineno}: invalid value {value:?}"))?;
        records.push(date, value);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_records() {
        let text = "# steps\n2023-01-01,5\n\n2023-01-03 7.5\n  2023-01-04\t-1  \n";
        let records = parse_records(text).unwrap();
        assert_eq!(
            records.dates,
            [date!(2023 - 01 - 01), date!(2023 - 01 - 03), date!(2023 - 01 - 04)]
        );
        assert_eq!(records.values, [5.0, 7.5, -1.0]);
    }

    #[test]
    fn test_comma_and_space() {
        let records = parse_records("2023-06-15, 3\n").unwrap();
        assert_eq!(records.values, [3.0]);
    }

    #[test]
    fn test_space_before_comma() {
        let records = parse_records("2023-01-01 , 5\n2023-01-02\t,6\n").unwrap();
        assert_eq!(records.dates, [date!(2023 - 01 - 01), date!(2023 - 01 - 02)]);
        assert_eq!(records.values, [5.0, 6.0]);
    }

    #[test]
    fn test_bad_date() {
        let e = parse_records("2023-01-01 1\n2023-02-30 2\n").unwrap_err();
        assert_eq!(e.to_string(), "line 2");
        assert!(format!("{e:#}").contains("invalid date \"2023-02-30\""));
    }

    #[test]
    fn test_bad_value() {
        let e = parse_records("2023-01-01 lots\n").unwrap_err();
        assert_eq!(e.to_string(), "line 1: invalid value \"lots\"");
    }

    #[test]
    fn test_missing_value() {
        let e = parse_records("2023-01-01\n").unwrap_err();
        assert_eq!(e.to_string(), "line 1: expected a date and a value");
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_records("# nothing\n\n").unwrap(), Records::default());
    }
}
