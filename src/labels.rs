//! Positions and text of the ticks and annotations around and inside a grid.
//!
//! Every position is in cell units along an axis of the displayed grid, with
//! the center of cell `i` at `i + 0.5`.
use crate::dates::DateSeries;
use crate::grid::{date_grid, Grid, Orientation, DAYS_IN_WEEK};
use crate::options::ValueFormat;
use std::collections::BTreeMap;
use time::Month;

/// Weekday abbreviations, Monday first
pub const WEEKDAY_ABBRS: [&str; DAYS_IN_WEEK] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub const MONTH_ABBRS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_abbr(month: Month) -> &'static str {
    MONTH_ABBRS[usize::from(u8::from(month)) - 1]
}

/// A label at a position along one axis
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub text: String,
}

impl Tick {
    /// The index of the cell the tick falls in
    pub fn cell(&self) -> usize {
        cell_index(self.position)
    }
}

/// A label written inside a single cell
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellLabel {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

impl CellLabel {
    /// `(x, y)` of the center of the cell
    pub fn center(&self) -> (f64, f64) {
        (to_f64(self.col) + 0.5, to_f64(self.row) + 0.5)
    }
}

/// The run of cells along the week axis occupied by one category
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LabelSpan<K> {
    pub key: K,
    pub first: usize,
    pub last: usize,
}

impl<K> LabelSpan<K> {
    pub fn centroid(&self) -> f64 {
        to_f64(self.first + self.last) / 2.0 + 0.5
    }
}

/// A year label at the middle of the year's run of weeks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearLabel {
    pub year: i32,
    pub position: f64,
}

impl YearLabel {
    pub fn cell(&self) -> usize {
        cell_index(self.position)
    }
}

pub fn weekday_ticks() -> Vec<Tick> {
    WEEKDAY_ABBRS
        .iter()
        .enumerate()
        .map(|(i, abbr)| Tick {
            position: to_f64(i) + 0.5,
            text: (*abbr).to_owned(),
        })
        .collect()
}

/// Each date's day of the month, in its cell
pub fn day_labels(series: &DateSeries, orientation: Orientation) -> Vec<CellLabel> {
    let grid = date_grid(series.iter().map(|dv| (dv.date, dv.day())), orientation);
    grid.cells()
        .map(|(row, col, day)| CellLabel {
            row,
            col,
            text: day.to_string(),
        })
        .collect()
}

/// Each finite value on `grid`, in its cell
pub fn value_labels(grid: &Grid<f64>, format: ValueFormat) -> Vec<CellLabel> {
    grid.cells()
        .filter(|(_, _, v)| v.is_finite())
        .map(|(row, col, &v)| CellLabel {
            row,
            col,
            text: format.format(v),
        })
        .collect()
}

/// For each distinct key on `grid`, the first and last week-axis coordinates
/// at which it occurs, ordered by key
pub fn spans<K: Ord + Copy>(grid: &Grid<K>) -> Vec<LabelSpan<K>> {
    let mut extents = BTreeMap::<K, (usize, usize)>::new();
    for (row, col, &key) in grid.cells() {
        let w = grid.week_of(row, col);
        extents
            .entry(key)
            .and_modify(|(first, last)| {
                *first = w.min(*first);
                *last = w.max(*last);
            })
            .or_insert((w, w));
    }
    extents
        .into_iter()
        .map(|(key, (first, last))| LabelSpan { key, first, last })
        .collect()
}

pub fn month_spans(series: &DateSeries, orientation: Orientation) -> Vec<LabelSpan<(i32, u8)>> {
    spans(&date_grid(
        series
            .iter()
            .map(|dv| (dv.date, (dv.year(), u8::from(dv.month())))),
        orientation,
    ))
}

/// A tick naming each month at the middle of its run of weeks
pub fn month_ticks(series: &DateSeries, orientation: Orientation) -> Vec<Tick> {
    month_spans(series, orientation)
        .into_iter()
        .map(|span| Tick {
            position: span.centroid(),
            text: MONTH_ABBRS[usize::from(span.key.1) - 1].to_owned(),
        })
        .collect()
}

pub fn year_labels(series: &DateSeries, orientation: Orientation) -> Vec<YearLabel> {
    let grid = date_grid(series.iter().map(|dv| (dv.date, dv.year())), orientation);
    spans(&grid)
        .into_iter()
        .map(|span| YearLabel {
            year: span.key,
            position: span.centroid(),
        })
        .collect()
}

pub(crate) fn to_f64(i: usize) -> f64 {
    f64::from(u32::try_from(i).unwrap_or(u32::MAX))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn cell_index(position: f64) -> usize {
    if position.is_nan() {
        0
    } else {
        position.max(0.0).floor() as usize
    }
}
