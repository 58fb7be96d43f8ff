//! Placement of dated payloads on a week-by-weekday matrix
use crate::dates::{finite_range, DateSeries};
use std::collections::{BTreeMap, BTreeSet};
use time::{Date, Weekday};
use tracing::trace;

pub const DAYS_IN_WEEK: usize = 7;

/// Which way the weeks of a [`Grid`] run
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// One row per week, one column per weekday
    #[default]
    Vertical,
    /// One row per weekday, one column per week
    Horizontal,
}

impl Orientation {
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

pub(crate) trait WeekdayExt {
    fn index0(&self) -> usize;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        usize::from(self.number_days_from_monday())
    }
}

/// A dense matrix of optional cells addressed by week ordinal and weekday.
///
/// Cells are stored row-major.  `None` marks a cell with no date behind it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
    orientation: Orientation,
}

impl<T> Grid<T> {
    fn empty(weeks: usize, orientation: Orientation) -> Grid<T> {
        let (rows, cols) = match orientation {
            Orientation::Vertical => (weeks, DAYS_IN_WEEK),
            Orientation::Horizontal => (DAYS_IN_WEEK, weeks),
        };
        Grid {
            rows,
            cols,
            cells: std::iter::repeat_with(|| None).take(rows * cols).collect(),
            orientation,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of the week axis
    pub fn weeks(&self) -> usize {
        match self.orientation {
            Orientation::Vertical => self.rows,
            Orientation::Horizontal => self.cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col].as_ref()
        } else {
            None
        }
    }

    /// Look up a cell by week ordinal and weekday index regardless of
    /// orientation
    pub fn at_week_day(&self, week: usize, weekday: usize) -> Option<&T> {
        match self.orientation {
            Orientation::Vertical => self.get(week, weekday),
            Orientation::Horizontal => self.get(weekday, week),
        }
    }

    /// Convert a `(row, col)` position to the coordinate along the week axis
    pub fn week_of(&self, row: usize, col: usize) -> usize {
        match self.orientation {
            Orientation::Vertical => row,
            Orientation::Horizontal => col,
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = Some(value);
    }

    /// Iterate over the non-empty cells in row-major order as `(row, col,
    /// value)` triples
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.as_ref().map(|v| (i / cols, i % cols, v)))
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn transpose(mut self) -> Grid<T> {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.cols + col].take());
            }
        }
        Grid {
            rows: self.cols,
            cols: self.rows,
            cells,
            orientation: self.orientation.flipped(),
        }
    }

    pub fn with_orientation(self, orientation: Orientation) -> Grid<T> {
        if self.orientation == orientation {
            self
        } else {
            self.transpose()
        }
    }

    /// Append empty weeks until the grid spans at least `weeks` weeks
    pub fn pad_weeks(self, weeks: usize) -> Grid<T> {
        let orientation = self.orientation;
        let mut grid = self.with_orientation(Orientation::Vertical);
        if grid.rows < weeks {
            grid.cells
                .extend(std::iter::repeat_with(|| None).take((weeks - grid.rows) * grid.cols));
            grid.rows = weeks;
        }
        grid.with_orientation(orientation)
    }

    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|c| c.as_ref().map(&mut f)).collect(),
            orientation: self.orientation,
        }
    }
}

impl Grid<f64> {
    /// The smallest and largest finite values on the grid
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.cells().map(|(_, _, &v)| v))
    }

    /// The grid as plain rows of numbers, with NaN in the empty cells
    pub fn to_nan_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|c| c.unwrap_or(f64::NAN)).collect())
            .collect()
    }
}

/// The ISO `(year, week)` pair a date falls in
fn iso_week(date: Date) -> (i32, u8) {
    let (year, week, _) = date.to_iso_week_date();
    (year, week)
}

/// Lay out `entries` on a grid with one week per ISO `(year, week)` pair
/// present among the dates.
///
/// Weeks are numbered by their rank among the distinct pairs, so a stretch of
/// weeks with no dates does not take up any space.  If two entries land on the
/// same cell, the later one wins.
pub fn date_grid<T, I>(entries: I, orientation: Orientation) -> Grid<T>
where
    I: IntoIterator<Item = (Date, T)>,
{
    let entries = entries.into_iter().collect::<Vec<_>>();
    let weeks = entries
        .iter()
        .map(|&(date, _)| iso_week(date))
        .collect::<BTreeSet<_>>();
    let week_index = weeks
        .into_iter()
        .enumerate()
        .map(|(i, w)| (w, i))
        .collect::<BTreeMap<_, _>>();
    let mut grid = Grid::empty(week_index.len(), Orientation::Vertical);
    for (date, payload) in entries {
        let week = week_index[&iso_week(date)];
        grid.set(week, date.weekday().index0(), payload);
    }
    trace!(weeks = grid.rows, ?orientation, "Built date grid");
    grid.with_orientation(orientation)
}

impl DateSeries {
    /// The series' values laid out by [`date_grid()`]
    pub fn grid(&self, orientation: Orientation) -> Grid<f64> {
        date_grid(self.iter().map(|dv| (dv.date, dv.value)), orientation)
    }

    /// The series' dates laid out by [`date_grid()`]
    pub fn day_grid(&self, orientation: Orientation) -> Grid<Date> {
        date_grid(self.dates().map(|d| (d, d)), orientation)
    }
}
