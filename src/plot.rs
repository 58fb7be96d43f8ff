//! The three plot kinds: a strip of consecutive weeks, a single month, and a
//! calendar of tiled months
use crate::dates::{DateInput, DateSeries};
use crate::error::PlotError;
use crate::grid::{Grid, Orientation};
use crate::labels::{
    day_labels, month_ticks, value_labels, weekday_ticks, year_labels, CellLabel, Tick, YearLabel,
};
use crate::month::{extract_month, CAL_MODE_WEEKS};
use crate::options::{OptionsError, PlotOptions, ValueFormat};
use crate::outline::{month_outlines, trace_outline, OutlinePolygon};
use crate::palette::Palette;
use std::num::NonZeroUsize;
use time::Month;
use tracing::{debug, trace};

/// Everything needed to draw one heatmap
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapLayout {
    pub series: DateSeries,
    pub grid: Grid<f64>,
    pub palette: Palette,
    /// Values mapped to the two ends of the palette
    pub color_range: (f64, f64),
    /// Ticks along the weekday axis
    pub weekday_ticks: Vec<Tick>,
    /// Ticks along the week axis
    pub month_ticks: Vec<Tick>,
    pub year_labels: Vec<YearLabel>,
    pub cell_labels: Vec<CellLabel>,
    pub outlines: Vec<OutlinePolygon>,
    pub title: Option<String>,
    pub colorbar: bool,
    pub frame: bool,
    /// Format of the colorbar's end labels
    pub colorbar_format: ValueFormat,
}

impl HeatmapLayout {
    pub fn orientation(&self) -> Orientation {
        self.grid.orientation()
    }

    fn build(
        series: DateSeries,
        grid: Grid<f64>,
        options: &PlotOptions,
        color_range: (f64, f64),
    ) -> HeatmapLayout {
        let orientation = grid.orientation();
        let cell_labels = if options.value_label {
            value_labels(&grid, options.value_format)
        } else if options.date_label {
            day_labels(&series, orientation)
        } else {
            Vec::new()
        };
        HeatmapLayout {
            weekday_ticks: if options.weekday_label {
                weekday_ticks()
            } else {
                Vec::new()
            },
            month_ticks: if options.month_label {
                month_ticks(&series, orientation)
            } else {
                Vec::new()
            },
            year_labels: if options.year_label {
                year_labels(&series, orientation)
            } else {
                Vec::new()
            },
            cell_labels,
            outlines: Vec::new(),
            palette: options.palette.clone(),
            color_range,
            title: options.title.clone(),
            colorbar: options.colorbar,
            frame: options.frame,
            colorbar_format: options.resolved_colorbar_format(),
            series,
            grid,
        }
    }
}

/// A grid of single-month heatmaps
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarLayout {
    pub title: String,
    pub ncols: NonZeroUsize,
    pub tiles: Vec<HeatmapLayout>,
}

impl CalendarLayout {
    pub fn nrows(&self) -> usize {
        self.tiles.len().div_ceil(self.ncols.get())
    }

    /// Number of slots in the last row left without a tile
    pub fn hidden_tiles(&self) -> usize {
        self.nrows() * self.ncols.get() - self.tiles.len()
    }

    /// `(row, col)` of the `i`-th tile
    pub fn slot(&self, i: usize) -> (usize, usize) {
        (i / self.ncols.get(), i % self.ncols.get())
    }
}

/// Lay out every day from the earliest to the latest of `dates` as one strip
/// of weeks.
///
/// # Errors
///
/// Fails if `options` are inconsistent or the input cannot be normalized.
pub fn heatmap<D, V>(dates: D, values: V, options: &PlotOptions) -> Result<HeatmapLayout, PlotError>
where
    D: IntoIterator,
    D::Item: Into<DateInput>,
    V: IntoIterator<Item = f64>,
{
    options.validate()?;
    let series = DateSeries::normalize(dates, values)?;
    let grid = series.grid(options.orientation);
    let color_range = options.color_range(grid.value_range());
    let outlines = if options.month_grid {
        month_outlines(&series, &grid)
    } else {
        Vec::new()
    };
    debug!(
        days = series.len(),
        shape = ?grid.shape(),
        ?color_range,
        "Laid out heatmap"
    );
    let mut layout = HeatmapLayout::build(series, grid, options, color_range);
    layout.outlines = outlines;
    Ok(layout)
}

/// Lay out a single month of `dates`, by default the month of the earliest
/// date.
///
/// # Errors
///
/// Fails if `options` are inconsistent, if the input cannot be normalized, or
/// if the month is missing from the input or occurs in more than one year.
pub fn month_plot<D, V>(
    dates: D,
    values: V,
    month: Option<Month>,
    options: &PlotOptions,
) -> Result<HeatmapLayout, PlotError>
where
    D: IntoIterator,
    D::Item: Into<DateInput>,
    V: IntoIterator<Item = f64>,
{
    options.validate()?;
    let series = DateSeries::normalize(dates, values)?;
    month_layout(&series, month, options)
}

fn month_layout(
    series: &DateSeries,
    month: Option<Month>,
    options: &PlotOptions,
) -> Result<HeatmapLayout, PlotError> {
    let series = extract_month(series, month)?;
    let month = series.first().month();
    let mut grid = series.grid(options.orientation);
    if options.cal_mode {
        grid = grid.pad_weeks(CAL_MODE_WEEKS);
    }
    let outlines = if options.month_grid {
        vec![trace_outline(&series, &grid, month)?]
    } else {
        Vec::new()
    };
    let color_range = options.color_range(grid.value_range());
    let options = PlotOptions {
        month_label: false,
        year_label: false,
        title: Some(options.title.clone().unwrap_or_else(|| month.to_string())),
        ..options.clone()
    };
    trace!(%month, year = series.first().year(), shape = ?grid.shape(), "Laid out month");
    let mut layout = HeatmapLayout::build(series, grid, &options, color_range);
    layout.outlines = outlines;
    Ok(layout)
}

/// Lay out one six-week month block per month present in `dates`, `ncols`
/// blocks to a row, all sharing one color scale.
///
/// # Errors
///
/// Fails if `options` are inconsistent, if `ncols` is zero, or if the input
/// cannot be normalized.
pub fn calendar_plot<D, V>(
    dates: D,
    values: V,
    ncols: usize,
    options: &PlotOptions,
) -> Result<CalendarLayout, PlotError>
where
    D: IntoIterator,
    D::Item: Into<DateInput>,
    V: IntoIterator<Item = f64>,
{
    options.validate()?;
    let ncols = NonZeroUsize::new(ncols).ok_or(OptionsError::ZeroColumns)?;
    let series = DateSeries::normalize(dates, values)?;
    let (lo, hi) = options.color_range(series.value_range());
    let tile_options = PlotOptions {
        cal_mode: true,
        cmin: Some(lo),
        cmax: Some(hi),
        title: None,
        ..options.clone()
    };
    let tiles = series
        .year_months()
        .into_iter()
        .filter_map(|(year, month)| series.year_month(year, month).map(|s| (s, month)))
        .map(|(sub, month)| month_layout(&sub, Some(month), &tile_options))
        .collect::<Result<Vec<_>, _>>()?;
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| calendar_title(&series.years()));
    let layout = CalendarLayout {
        title,
        ncols,
        tiles,
    };
    debug!(
        tiles = layout.tiles.len(),
        nrows = layout.nrows(),
        hidden = layout.hidden_tiles(),
        "Laid out calendar"
    );
    Ok(layout)
}

/// "Calendar 2023", "Calendar 2022 and 2023", or "Calendar 2021, 2022, and
/// 2023"
pub fn calendar_title(years: &[i32]) -> String {
    match years {
        [] => String::from("Calendar"),
        [y] => format!("Calendar {y}"),
        [y1, y2] => format!("Calendar {y1} and {y2}"),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Calendar {init}, and {last}")
        }
    }
}
