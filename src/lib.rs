//! Calendar-shaped heatmaps of daily data.
//!
//! Dates are laid out on a grid of ISO weeks, one cell per day, and each
//! cell is colored by its value.  [`heatmap()`] lays out a whole date range
//! as one strip, [`month_plot()`] lays out a single month as a six-week
//! block, and [`calendar_plot()`] tiles one block per month.  The resulting
//! layouts are plain data; [`HeatmapWidget`] and [`CalendarWidget`] draw them
//! with `ratatui`.
//!
//! ```
//! use calheat::{heatmap, PlotOptions};
//!
//! let layout = heatmap(["2024-01-01", "2024-01-10"], [1.0, 5.0], &PlotOptions::default())?;
//! assert_eq!(layout.grid.shape(), (2, 7));
//! assert_eq!(layout.series.len(), 10);
//! # Ok::<(), calheat::PlotError>(())
//! ```
pub mod dates;
pub mod error;
pub mod grid;
pub mod labels;
pub mod month;
pub mod options;
pub mod outline;
pub mod palette;
pub mod plot;
pub mod render;
pub mod style;
pub use crate::dates::{DateInput, DateSeries, DateValue, NormalizeError};
pub use crate::error::PlotError;
pub use crate::grid::{date_grid, Grid, Orientation};
pub use crate::month::{preprocess_month, MonthError};
pub use crate::options::{PlotOptions, ValueFormat};
pub use crate::outline::{trace_outline, OutlinePolygon};
pub use crate::palette::{NamedPalette, Palette};
pub use crate::plot::{calendar_plot, heatmap, month_plot, CalendarLayout, HeatmapLayout};
pub use crate::render::{CalendarWidget, HeatmapWidget};
pub use crate::style::StyleConfig;
