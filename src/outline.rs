//! Tracing the calendar-shaped boundary of a month's cells
use crate::dates::DateSeries;
use crate::grid::{Grid, Orientation, DAYS_IN_WEEK};
use thiserror::Error;
use time::{Date, Month};
use tracing::debug;

/// A corner between grid cells.  `x` counts columns and `y` counts rows of
/// the grid as displayed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Vertex {
    pub x: usize,
    pub y: usize,
}

impl Vertex {
    pub fn new(x: usize, y: usize) -> Vertex {
        Vertex { x, y }
    }

    fn swapped(self) -> Vertex {
        Vertex {
            x: self.y,
            y: self.x,
        }
    }
}

pub const OUTLINE_VERTICES: usize = 9;

/// A closed polygon around a month's cells.  The first and last vertices are
/// the same.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutlinePolygon([Vertex; OUTLINE_VERTICES]);

impl OutlinePolygon {
    pub fn vertices(&self) -> &[Vertex; OUTLINE_VERTICES] {
        &self.0
    }

    pub fn is_closed(&self) -> bool {
        self.0[0] == self.0[OUTLINE_VERTICES - 1]
    }

    /// The polygon's edges as pairs of consecutive vertices
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no cells on the grid belong to {month}")]
pub struct EmptyOutlineError {
    pub month: Month,
}

/// Trace the outline of the cells of `grid` whose dates fall in `month`.
///
/// `series` must be the series that `grid` was built from; `grid` may have
/// been padded with extra weeks since.
///
/// # Errors
///
/// Returns [`EmptyOutlineError`] if no non-empty cell of `grid` falls in
/// `month`.
pub fn trace_outline<T>(
    series: &DateSeries,
    grid: &Grid<T>,
    month: Month,
) -> Result<OutlinePolygon, EmptyOutlineError> {
    let days = series.day_grid(Orientation::Vertical);
    trace_where(&days, grid, |d| d.month() == month).ok_or(EmptyOutlineError { month })
}

/// Outline every `(year, month)` of `series` on `grid`, chronologically
pub fn month_outlines<T>(series: &DateSeries, grid: &Grid<T>) -> Vec<OutlinePolygon> {
    let days = series.day_grid(Orientation::Vertical);
    let outlines = series
        .year_months()
        .into_iter()
        .filter_map(|(year, month)| {
            trace_where(&days, grid, |d| d.year() == year && d.month() == month)
        })
        .collect::<Vec<_>>();
    debug!(outlines = outlines.len(), "Traced month outlines");
    outlines
}

/// `days` is the series' dates on a vertical grid
fn trace_where<T, P>(days: &Grid<Date>, grid: &Grid<T>, in_scope: P) -> Option<OutlinePolygon>
where
    P: Fn(Date) -> bool,
{
    let horizontal = grid.orientation() == Orientation::Horizontal;
    let coords = (0..grid.weeks())
        .flat_map(|y| (0..DAYS_IN_WEEK).map(move |x| Vertex::new(x, y)))
        .filter(|v| grid.at_week_day(v.y, v.x).is_some())
        .filter(|v| days.get(v.y, v.x).is_some_and(|&d| in_scope(d)))
        .collect::<Vec<_>>();
    let (&upper_left, &last) = (coords.first()?, coords.last()?);
    let min_y = coords.iter().map(|v| v.y).min()?;
    let max_y = coords.iter().map(|v| v.y).max()?;
    let upper_right = Vertex::new(DAYS_IN_WEEK, min_y);
    let lower_right = Vertex::new(DAYS_IN_WEEK, max_y);
    let lower_right2 = Vertex::new(last.x + 1, last.y + 1);
    let lower_right1 = if lower_right == lower_right2 {
        lower_right2
    } else {
        Vertex::new(lower_right2.x, lower_right2.y - 1)
    };
    let lower_left = Vertex::new(0, max_y + 1);
    let corner_last = Vertex::new(upper_left.x, upper_left.y + 1);
    let second_last = Vertex::new(0, corner_last.y);
    let mut vertices = [
        upper_left,
        upper_right,
        lower_right,
        lower_right1,
        lower_right2,
        lower_left,
        second_last,
        corner_last,
        upper_left,
    ];
    if horizontal {
        for v in &mut vertices {
            *v = v.swapped();
        }
    }
    Some(OutlinePolygon(vertices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::{extract_month, CAL_MODE_WEEKS};

    fn v(x: usize, y: usize) -> Vertex {
        Vertex::new(x, y)
    }

    fn february() -> DateSeries {
        let series = DateSeries::normalize(["2023-02-01", "2023-02-28"], [1.0, 2.0]).unwrap();
        extract_month(&series, None).unwrap()
    }

    #[test]
    fn test_february_2023() {
        let series = february();
        let grid = series.grid(Orientation::Vertical);
        let outline = trace_outline(&series, &grid, Month::February).unwrap();
        assert_eq!(
            outline.vertices(),
            &[
                v(2, 0),
                v(7, 0),
                v(7, 4),
                v(2, 4),
                v(2, 5),
                v(0, 5),
                v(0, 1),
                v(2, 1),
                v(2, 0),
            ]
        );
        assert!(outline.is_closed());
        assert_eq!(outline.edges().count(), 8);
    }

    #[test]
    fn test_padded_grid() {
        let series = february();
        let grid = series.grid(Orientation::Vertical).pad_weeks(CAL_MODE_WEEKS);
        let outline = trace_outline(&series, &grid, Month::February).unwrap();
        assert_eq!(outline.vertices()[5], v(0, 5));
    }

    #[test]
    fn test_horizontal_swaps() {
        let series = february();
        let vertical = trace_outline(
            &series,
            &series.grid(Orientation::Vertical),
            Month::February,
        )
        .unwrap();
        let horizontal = trace_outline(
            &series,
            &series.grid(Orientation::Horizontal),
            Month::February,
        )
        .unwrap();
        for (a, b) in vertical.vertices().iter().zip(horizontal.vertices()) {
            assert_eq!(a.swapped(), *b);
        }
    }

    #[test]
    fn test_month_ending_on_sunday() {
        // April 2023 runs Saturday the 1st through Sunday the 30th.
        let series = DateSeries::normalize(["2023-04-01", "2023-04-30"], [1.0, 1.0]).unwrap();
        let grid = series.grid(Orientation::Vertical);
        let outline = trace_outline(&series, &grid, Month::April).unwrap();
        assert_eq!(outline.vertices()[0], v(5, 0));
        assert_eq!(outline.vertices()[2], v(7, 4));
        assert_eq!(outline.vertices()[3], v(7, 4));
        assert_eq!(outline.vertices()[4], v(7, 5));
        assert_eq!(outline.vertices()[5], v(0, 5));
    }

    #[test]
    fn test_outlines_across_months() {
        let series = DateSeries::normalize(["2022-12-20", "2023-02-10"], [1.0, 1.0]).unwrap();
        let grid = series.grid(Orientation::Horizontal);
        let outlines = month_outlines(&series, &grid);
        assert_eq!(outlines.len(), 3);
        assert!(outlines.iter().all(OutlinePolygon::is_closed));
        // January starts on a Sunday, in the second week of the series.
        assert_eq!(outlines[1].vertices()[0], v(1, 6));
    }

    #[test]
    fn test_outlines_match_single_month() {
        let series = DateSeries::normalize(["2023-01-10", "2023-03-20"], [1.0, 1.0]).unwrap();
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let grid = series.grid(orientation);
            let outlines = month_outlines(&series, &grid);
            let months = [Month::January, Month::February, Month::March];
            assert_eq!(outlines.len(), months.len());
            for (outline, month) in outlines.iter().zip(months) {
                assert_eq!(Ok(*outline), trace_outline(&series, &grid, month));
            }
        }
    }

    #[test]
    fn test_missing_month() {
        let series = february();
        let grid = series.grid(Orientation::Vertical);
        assert_eq!(
            trace_outline(&series, &grid, Month::March),
            Err(EmptyOutlineError {
                month: Month::March
            })
        );
    }
}
