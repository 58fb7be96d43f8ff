//! Drawing heatmap and calendar layouts into a terminal buffer.
//!
//! Each grid row takes two lines: one for the cells and one for the rule
//! below them, where month outlines are drawn.  Each grid column is
//! `cellwidth` columns wide, plus one column for the rule to its left.
use crate::grid::Orientation;
use crate::labels::{cell_index, Tick};
use crate::outline::Vertex;
use crate::palette::Rgb;
use crate::plot::{CalendarLayout, HeatmapLayout};
use crate::style::StyleConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Widget},
};
use std::collections::BTreeMap;

/// Number of lines taken up by each grid row
const ROW_LINES: u16 = 2;

/// Width of the left margin in which years are written in vertical layouts
const YEAR_MARGIN: u16 = 5;

/// Columns between the right edge of the grid and the month names
const MONTH_GUTTER: u16 = 1;

const MONTH_LABEL_WIDTH: u16 = 3;

/// Width of the left margin in which weekdays are written in horizontal
/// layouts
const WEEKDAY_MARGIN: u16 = 3;

const COLORBAR_STEPS: u16 = 16;

/// Number of lines taken up by the colorbar and the blank line above it
const COLORBAR_LINES: u16 = 2;

/// Blank columns between neighboring calendar tiles
const TILE_GAP: u16 = 2;

/// Blank lines between rows of calendar tiles
const TILE_ROW_GAP: u16 = 1;

const UP: u8 = 1;
const DOWN: u8 = 2;
const LEFT: u8 = 4;
const RIGHT: u8 = 8;

/// Cell text lighter than this gets dark text on top
const LIGHT_LUMA: u8 = 128;

fn box_char(mask: u8) -> char {
    match mask {
        m if m == UP | DOWN | LEFT | RIGHT => '┼',
        m if m == UP | DOWN | RIGHT => '├',
        m if m == UP | DOWN | LEFT => '┤',
        m if m == DOWN | LEFT | RIGHT => '┬',
        m if m == UP | LEFT | RIGHT => '┴',
        m if m == DOWN | RIGHT => '┌',
        m if m == DOWN | LEFT => '┐',
        m if m == UP | RIGHT => '└',
        m if m == UP | LEFT => '┘',
        m if m & (UP | DOWN) != 0 => '│',
        _ => '─',
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn text_width(s: &str) -> u16 {
    to_u16(Line::raw(s).width())
}

/// Where things go within a heatmap's area, relative to its top-left corner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Geometry {
    orientation: Orientation,
    /// Top-left corner of everything inside the frame and margins
    origin_x: u16,
    origin_y: u16,
    grid_x: u16,
    grid_y: u16,
    grid_width: u16,
    grid_height: u16,
    /// Lines above the grid reserved for tick labels
    top_labels: u16,
    cell_width: u16,
    content_width: u16,
    width: u16,
    height: u16,
}

impl Geometry {
    fn new(layout: &HeatmapLayout, style: &StyleConfig) -> Geometry {
        let orientation = layout.orientation();
        // Cells widen to fit the longest cell label.
        let cell_width = layout
            .cell_labels
            .iter()
            .map(|label| text_width(&label.text))
            .fold(style.cellwidth(), u16::max);
        let frame = u16::from(layout.frame);
        let title_lines = if layout.title.is_some() {
            style.titlepad().saturating_add(1)
        } else {
            0
        };
        let has_weekdays = !layout.weekday_ticks.is_empty();
        let has_months = !layout.month_ticks.is_empty();
        let has_years = !layout.year_labels.is_empty();
        let (left, top_labels, right) = match orientation {
            Orientation::Vertical => (
                if has_years { YEAR_MARGIN } else { 0 },
                u16::from(has_weekdays),
                if has_months {
                    MONTH_GUTTER + MONTH_LABEL_WIDTH
                } else {
                    0
                },
            ),
            Orientation::Horizontal => (
                if has_weekdays { WEEKDAY_MARGIN } else { 0 },
                u16::from(has_years) + u16::from(has_months),
                0,
            ),
        };
        let rows = to_u16(layout.grid.rows());
        let cols = to_u16(layout.grid.cols());
        let grid_width = cols
            .saturating_mul(cell_width.saturating_add(1))
            .saturating_add(1);
        let grid_height = rows.saturating_mul(ROW_LINES).saturating_add(1);
        let origin_x = frame.saturating_add(style.xmargin());
        let origin_y = frame.saturating_add(style.ymargin());
        let title_width = layout.title.as_deref().map_or(0, text_width);
        let colorbar_width = if layout.colorbar {
            let (lo, hi) = layout.color_range;
            text_width(&layout.colorbar_format.format(lo))
                .saturating_add(text_width(&layout.colorbar_format.format(hi)))
                .saturating_add(COLORBAR_STEPS + 2)
        } else {
            0
        };
        let content_width = left
            .saturating_add(grid_width)
            .saturating_add(right)
            .max(title_width)
            .max(colorbar_width);
        let grid_x = origin_x.saturating_add(left);
        let grid_y = origin_y
            .saturating_add(title_lines)
            .saturating_add(top_labels);
        let bottom = if layout.colorbar { COLORBAR_LINES } else { 0 };
        Geometry {
            orientation,
            origin_x,
            origin_y,
            grid_x,
            grid_y,
            grid_width,
            grid_height,
            top_labels,
            cell_width,
            content_width,
            width: origin_x.saturating_add(content_width).saturating_add(origin_x),
            height: grid_y
                .saturating_add(grid_height)
                .saturating_add(bottom)
                .saturating_add(origin_y),
        }
    }

    /// Top-left corner of the cell at `(row, col)`
    fn cell(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.grid_x
                .saturating_add(1)
                .saturating_add(to_u16(col).saturating_mul(self.cell_width.saturating_add(1))),
            self.grid_y
                .saturating_add(1)
                .saturating_add(to_u16(row).saturating_mul(ROW_LINES)),
        )
    }

    fn corner(&self, v: Vertex) -> (u16, u16) {
        (
            self.grid_x
                .saturating_add(to_u16(v.x).saturating_mul(self.cell_width.saturating_add(1))),
            self.grid_y
                .saturating_add(to_u16(v.y).saturating_mul(ROW_LINES)),
        )
    }

    /// Start of a `width`-column text centered in the cell column starting at
    /// `x`
    fn centered_in_cell(&self, x: u16, width: u16) -> u16 {
        x.saturating_add(self.cell_width.saturating_sub(width) / 2)
    }
}

/// A [`Widget`] drawing a [`HeatmapLayout`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatmapWidget<'a> {
    layout: &'a HeatmapLayout,
    style: &'a StyleConfig,
}

impl<'a> HeatmapWidget<'a> {
    pub fn new(layout: &'a HeatmapLayout, style: &'a StyleConfig) -> Self {
        HeatmapWidget { layout, style }
    }

    /// Width and height needed to draw the whole layout
    pub fn size(&self) -> (u16, u16) {
        let geo = Geometry::new(self.layout, self.style);
        (geo.width, geo.height)
    }

    fn cell_color(&self, value: f64) -> Rgb {
        self.layout
            .palette
            .color_for(value, self.layout.color_range)
    }
}

impl Widget for HeatmapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let geo = Geometry::new(self.layout, self.style);
        buf.set_style(area, self.style.base_style());
        if self.layout.frame {
            let framed = Rect {
                width: geo.width.min(area.width),
                height: geo.height.min(area.height),
                ..area
            };
            Block::bordered()
                .border_style(self.style.edge_style())
                .render(framed, buf);
        }
        let mut canvas = Canvas::new(area, buf);
        if let Some(title) = self.layout.title.as_deref() {
            let x = geo.origin_x.saturating_add(
                geo.content_width.saturating_sub(text_width(title)) / 2,
            );
            canvas.print(x, geo.origin_y, title, u16::MAX, self.style.title_style());
        }
        self.draw_cells(&mut canvas, &geo);
        self.draw_ticks(&mut canvas, &geo);
        self.draw_outlines(&mut canvas, &geo);
        if self.layout.colorbar {
            self.draw_colorbar(&mut canvas, &geo);
        }
    }
}

impl HeatmapWidget<'_> {
    fn draw_cells(&self, canvas: &mut Canvas<'_>, geo: &Geometry) {
        let grid = &self.layout.grid;
        for (row, col, &value) in grid.cells() {
            let (x, y) = geo.cell(row, col);
            let bg = Color::from(self.cell_color(value));
            canvas.fill(x, y, geo.cell_width, Style::new().bg(bg));
        }
        for label in &self.layout.cell_labels {
            let Some(&value) = grid.get(label.row, label.col) else {
                continue;
            };
            let rgb = self.cell_color(value);
            let fg = if rgb.luma() >= LIGHT_LUMA {
                Color::Black
            } else {
                Color::White
            };
            let (x, y) = geo.cell(label.row, label.col);
            let x = geo.centered_in_cell(x, text_width(&label.text));
            canvas.print(
                x,
                y,
                &label.text,
                geo.cell_width,
                Style::new().fg(fg).bg(Color::from(rgb)),
            );
        }
    }

    fn draw_ticks(&self, canvas: &mut Canvas<'_>, geo: &Geometry) {
        let style = self.style.label_style();
        let layout = self.layout;
        match geo.orientation {
            Orientation::Vertical => {
                let header_y = geo.grid_y.saturating_sub(1);
                for tick in &layout.weekday_ticks {
                    let (x, _) = geo.cell(0, tick.cell());
                    let x = geo.centered_in_cell(x, text_width(&tick.text));
                    canvas.print(x, header_y, &tick.text, u16::MAX, style);
                }
                let month_x = geo
                    .grid_x
                    .saturating_add(geo.grid_width)
                    .saturating_add(MONTH_GUTTER);
                for tick in &layout.month_ticks {
                    let (_, y) = geo.cell(tick.cell(), 0);
                    canvas.print(month_x, y, &tick.text, u16::MAX, style);
                }
                for label in &layout.year_labels {
                    let (_, y) = geo.cell(label.cell(), 0);
                    canvas.print(
                        geo.origin_x,
                        y,
                        &label.year.to_string(),
                        YEAR_MARGIN,
                        style,
                    );
                }
            }
            Orientation::Horizontal => {
                for tick in &layout.weekday_ticks {
                    let (_, y) = geo.cell(tick.cell(), 0);
                    canvas.print(geo.origin_x, y, &tick.text, WEEKDAY_MARGIN, style);
                }
                let month_y = geo.grid_y.saturating_sub(1);
                for tick in &layout.month_ticks {
                    self.draw_week_axis_label(canvas, geo, tick, month_y, style);
                }
                let year_y = geo.grid_y.saturating_sub(geo.top_labels);
                for label in &layout.year_labels {
                    let tick = Tick {
                        position: label.position,
                        text: label.year.to_string(),
                    };
                    self.draw_week_axis_label(canvas, geo, &tick, year_y, style);
                }
            }
        }
    }

    fn draw_week_axis_label(
        &self,
        canvas: &mut Canvas<'_>,
        geo: &Geometry,
        tick: &Tick,
        y: u16,
        style: Style,
    ) {
        let (x, _) = geo.cell(0, cell_index(tick.position));
        let x = geo.centered_in_cell(x, text_width(&tick.text));
        canvas.print(x, y, &tick.text, u16::MAX, style);
    }

    fn draw_outlines(&self, canvas: &mut Canvas<'_>, geo: &Geometry) {
        let mut joints = BTreeMap::<(u16, u16), u8>::new();
        for outline in &self.layout.outlines {
            for (a, b) in outline.edges() {
                let ((x1, y1), (x2, y2)) = (geo.corner(a), geo.corner(b));
                if y1 == y2 {
                    for x in x1.min(x2)..x1.max(x2) {
                        *joints.entry((x, y1)).or_default() |= RIGHT;
                        *joints.entry((x + 1, y1)).or_default() |= LEFT;
                    }
                } else if x1 == x2 {
                    for y in y1.min(y2)..y1.max(y2) {
                        *joints.entry((x1, y)).or_default() |= DOWN;
                        *joints.entry((x1, y + 1)).or_default() |= UP;
                    }
                }
            }
        }
        let style = self.style.edge_style();
        for ((x, y), mask) in joints {
            canvas.put(x, y, box_char(mask), style);
        }
    }

    fn draw_colorbar(&self, canvas: &mut Canvas<'_>, geo: &Geometry) {
        let (lo, hi) = self.layout.color_range;
        let y = geo
            .grid_y
            .saturating_add(geo.grid_height)
            .saturating_add(COLORBAR_LINES - 1);
        let style = self.style.label_style();
        let lo_text = self.layout.colorbar_format.format(lo);
        let mut x = geo.origin_x;
        canvas.print(x, y, &lo_text, u16::MAX, style);
        x = x.saturating_add(text_width(&lo_text)).saturating_add(1);
        for i in 0..COLORBAR_STEPS {
            let t = f64::from(i) / f64::from(COLORBAR_STEPS - 1);
            let bg = Color::from(self.layout.palette.color_at(t));
            canvas.fill(x, y, 1, Style::new().bg(bg));
            x = x.saturating_add(1);
        }
        let hi_text = self.layout.colorbar_format.format(hi);
        canvas.print(x.saturating_add(1), y, &hi_text, u16::MAX, style);
    }
}

/// A [`Widget`] drawing a [`CalendarLayout`]: the title, then the month tiles
/// left to right and top to bottom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarWidget<'a> {
    layout: &'a CalendarLayout,
    style: &'a StyleConfig,
}

impl<'a> CalendarWidget<'a> {
    pub fn new(layout: &'a CalendarLayout, style: &'a StyleConfig) -> Self {
        CalendarWidget { layout, style }
    }

    fn tile_size(&self) -> (u16, u16) {
        self.layout
            .tiles
            .iter()
            .map(|t| HeatmapWidget::new(t, self.style).size())
            .fold((0, 0), |(w, h), (tw, th)| (w.max(tw), h.max(th)))
    }

    fn title_lines(&self) -> u16 {
        self.style.titlepad().saturating_add(1)
    }

    /// Width and height needed to draw every tile
    pub fn size(&self) -> (u16, u16) {
        let (tw, th) = self.tile_size();
        let ncols = to_u16(self.layout.ncols.get());
        let nrows = to_u16(self.layout.nrows());
        let width = ncols
            .saturating_mul(tw)
            .saturating_add(ncols.saturating_sub(1).saturating_mul(TILE_GAP))
            .max(text_width(&self.layout.title));
        let height = nrows
            .saturating_mul(th)
            .saturating_add(nrows.saturating_sub(1).saturating_mul(TILE_ROW_GAP))
            .saturating_add(self.title_lines());
        (width, height)
    }
}

impl Widget for CalendarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style.base_style());
        let (width, _) = self.size();
        let title = &self.layout.title;
        {
            let mut canvas = Canvas::new(area, buf);
            let x = width.saturating_sub(text_width(title)) / 2;
            canvas.print(x, 0, title, u16::MAX, self.style.title_style());
        }
        let (tw, th) = self.tile_size();
        for (i, tile) in self.layout.tiles.iter().enumerate() {
            let (row, col) = self.layout.slot(i);
            let x = to_u16(col).saturating_mul(tw.saturating_add(TILE_GAP));
            let y = to_u16(row)
                .saturating_mul(th.saturating_add(TILE_ROW_GAP))
                .saturating_add(self.title_lines());
            let tile_area = Rect::new(
                area.x.saturating_add(x),
                area.y.saturating_add(y),
                tw,
                th,
            )
            .intersection(area);
            if !tile_area.is_empty() {
                HeatmapWidget::new(tile, self.style).render(tile_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> Canvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    // Text is cut off at `max_width` columns or the edge of the area,
    // whichever comes first.
    fn print(&mut self, x: u16, y: u16, s: &str, max_width: u16, style: Style) {
        if y < self.area.height && x < self.area.width {
            let width = (self.area.width - x).min(max_width);
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                s,
                usize::from(width),
                style,
            );
        }
    }

    fn fill(&mut self, x: u16, y: u16, width: u16, style: Style) {
        self.print(x, y, &" ".repeat(width.into()), width, style);
    }

    fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if y < self.area.height && x < self.area.width {
            if let Some(cell) = self.buf.cell_mut((x + self.area.x, y + self.area.y)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PlotOptions, ValueFormat};
    use crate::plot::{calendar_plot, heatmap, month_plot};
    use time::Month;

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| symbol(buf, x, y)).collect()
    }

    const PALE: Color = Color::Rgb(247, 252, 245);

    #[test]
    fn test_single_date_vertical() {
        let layout = heatmap(["2023-06-15"], [3.0], &PlotOptions::default()).unwrap();
        let style = StyleConfig::default();
        let widget = HeatmapWidget::new(&layout, &style);
        assert_eq!(widget.size(), (38, 4));
        let area = Rect::new(0, 0, 38, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let mut expected = Buffer::with_lines([
            format!("      Mo  Tu  We  Th  Fr  Sa  Su{}", " ".repeat(6)),
            " ".repeat(38),
            format!("2023{}Jun", " ".repeat(31)),
            " ".repeat(38),
        ]);
        expected.set_style(area, style.base_style());
        for i in 0..7 {
            expected.set_style(Rect::new(6 + 4 * i, 0, 2, 1), style.label_style());
        }
        expected.set_style(Rect::new(0, 2, 4, 1), style.label_style());
        expected.set_style(Rect::new(35, 2, 3, 1), style.label_style());
        // Thursday
        expected.set_style(Rect::new(18, 2, 3, 1), Style::new().bg(PALE));
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_weeks_across_with_outlines() {
        let options = PlotOptions::default()
            .orientation(Orientation::Horizontal)
            .month_grid(true);
        let dates = crate::dates::date_range(
            time::macros::date!(2023 - 01 - 23),
            time::macros::date!(2023 - 02 - 12),
        );
        let values = vec![1.0; dates.len()];
        let layout = heatmap(dates, values, &options).unwrap();
        let style = StyleConfig::default();
        let widget = HeatmapWidget::new(&layout, &style);
        assert_eq!(widget.size(), (16, 17));
        let area = Rect::new(0, 0, 16, 17);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let mut expected = Buffer::with_lines([
            "        2023    ",
            "        Jan Feb ",
            "   ┌───────┬───┐",
            "Mo │       │   │",
            "   │       │   │",
            "Tu │       │   │",
            "   │   ┌───┘   │",
            "We │   │       │",
            "   │   │       │",
            "Th │   │       │",
            "   │   │       │",
            "Fr │   │       │",
            "   │   │       │",
            "Sa │   │       │",
            "   │   │       │",
            "Su │   │       │",
            "   └───┴───────┘",
        ]);
        expected.set_style(area, style.base_style());
        for y in 0..7 {
            expected.set_style(Rect::new(0, 3 + 2 * y, 2, 1), style.label_style());
            for x in 0..3 {
                expected.set_style(Rect::new(4 + 4 * x, 3 + 2 * y, 3, 1), Style::new().bg(PALE));
            }
        }
        expected.set_style(Rect::new(8, 0, 4, 1), style.label_style());
        expected.set_style(Rect::new(8, 1, 3, 1), style.label_style());
        expected.set_style(Rect::new(12, 1, 3, 1), style.label_style());
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_wide_value_labels() {
        let options = PlotOptions::default().value_label(true);
        let layout = heatmap(["2023-06-15"], [1234.0], &options).unwrap();
        let style = StyleConfig::default();
        let widget = HeatmapWidget::new(&layout, &style);
        assert_eq!(widget.size(), (45, 4));
        let area = Rect::new(0, 0, 45, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(
            row_text(&buf, 2),
            format!("2023{}1234{}Jun", " ".repeat(17), " ".repeat(17))
        );
        assert!((21..25).all(|x| buf[(x, 2)].fg == Color::Black && buf[(x, 2)].bg == PALE));
        assert_eq!(symbol(&buf, 7, 0), "M");
    }

    #[test]
    fn test_colorbar_format() {
        let options = PlotOptions::default()
            .value_label(true)
            .colorbar(true)
            .colorbar_format(ValueFormat::Decimal);
        let layout = heatmap(["2023-06-14", "2023-06-15"], [0.0, 10.0], &options).unwrap();
        let style = StyleConfig::default();
        let widget = HeatmapWidget::new(&layout, &style);
        assert_eq!(widget.size(), (38, 6));
        let area = Rect::new(0, 0, 38, 6);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        // Cell values keep the integer format.
        assert_eq!(symbol(&buf, 18, 2), "1");
        assert_eq!(symbol(&buf, 19, 2), "0");
        assert_eq!(symbol(&buf, 20, 2), " ");
        assert_eq!(
            row_text(&buf, 5).trim_end(),
            format!("0.0 {} 10.0", " ".repeat(16))
        );
        assert_eq!(buf[(4, 5)].bg, PALE);
    }

    #[test]
    fn test_month_outline() {
        let options = PlotOptions {
            weekday_label: false,
            ..PlotOptions::default()
        }
        .month_grid(true);
        let layout = month_plot(
            ["2023-02-01", "2023-02-28"],
            [1.0, 2.0],
            Some(Month::February),
            &options,
        )
        .unwrap();
        let style = StyleConfig::default().with_option("titlepad", "0").unwrap();
        let widget = HeatmapWidget::new(&layout, &style);
        assert_eq!(widget.size(), (29, 14));
        let area = Rect::new(0, 0, 29, 14);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(symbol(&buf, 10, 0), "F");
        assert_eq!(symbol(&buf, 8, 1), "┌");
        assert_eq!(symbol(&buf, 18, 1), "─");
        assert_eq!(symbol(&buf, 28, 1), "┐");
        assert_eq!(symbol(&buf, 28, 5), "│");
        assert_eq!(symbol(&buf, 28, 9), "┘");
        assert_eq!(symbol(&buf, 8, 9), "┌");
        assert_eq!(symbol(&buf, 8, 11), "┘");
        assert_eq!(symbol(&buf, 0, 11), "└");
        assert_eq!(symbol(&buf, 0, 3), "┌");
        assert_eq!(symbol(&buf, 8, 3), "┘");
        assert_eq!(symbol(&buf, 4, 1), " ");
        // February 1st is a Wednesday.
        assert_ne!(buf[(9, 2)].bg, Color::Black);
        assert_eq!(buf[(5, 2)].bg, Color::Black);
    }

    #[test]
    fn test_date_labels() {
        let options = PlotOptions::default().date_label(true);
        let layout = heatmap(["2023-06-14", "2023-06-15"], [0.0, 10.0], &options).unwrap();
        let style = StyleConfig::default();
        let area = Rect::new(0, 0, 38, 4);
        let mut buf = Buffer::empty(area);
        HeatmapWidget::new(&layout, &style).render(area, &mut buf);
        // Wednesday the 14th is pale and Thursday the 15th is dark.
        assert_eq!(symbol(&buf, 14, 2), "1");
        assert_eq!(symbol(&buf, 15, 2), "4");
        assert_eq!(buf[(14, 2)].fg, Color::Black);
        assert_eq!(buf[(18, 2)].fg, Color::White);
    }

    #[test]
    fn test_calendar() {
        let (dates, values): (Vec<_>, Vec<_>) = crate::dates::date_range(
            time::macros::date!(2023 - 01 - 01),
            time::macros::date!(2023 - 03 - 31),
        )
        .into_iter()
        .map(|d| (d, f64::from(d.day())))
        .unzip();
        let layout = calendar_plot(dates, values, 4, &PlotOptions::default()).unwrap();
        let style = StyleConfig::default();
        let widget = CalendarWidget::new(&layout, &style);
        assert_eq!(widget.size(), (122, 18));
        let area = Rect::new(0, 0, 122, 18);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "Calendar 2023");
        assert_eq!(symbol(&buf, 54, 0), "C");
        assert_eq!(symbol(&buf, 11, 2), "J");
        assert_eq!(symbol(&buf, 31 + 10, 2), "F");
        assert_eq!(symbol(&buf, 62 + 12, 2), "M");
        assert!((93..122).all(|x| (2..18).all(|y| symbol(&buf, x, y) == " ")));
    }

    #[test]
    fn test_box_chars() {
        assert_eq!(box_char(LEFT | RIGHT), '─');
        assert_eq!(box_char(UP), '│');
        assert_eq!(box_char(UP | DOWN | LEFT | RIGHT), '┼');
        assert_eq!(box_char(DOWN | LEFT | RIGHT), '┬');
    }
}
