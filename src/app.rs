use crate::help::Help;
use crate::input::Records;
use calheat::{
    calendar_plot, heatmap, month_plot, CalendarLayout, CalendarWidget, HeatmapLayout,
    HeatmapWidget, PlotError, PlotOptions, StyleConfig,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, read};
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    widgets::Widget,
};
use std::io::{self, Write};
use time::Month;
use tracing::debug;

/// Which kind of plot to show
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum View {
    /// Every date as one strip of weeks
    Strip,
    Month(Month),
    Calendar { ncols: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Plot {
    Heatmap(HeatmapLayout),
    Calendar(CalendarLayout),
}

impl Plot {
    pub(crate) fn build(
        view: View,
        records: &Records,
        options: &PlotOptions,
    ) -> Result<Plot, PlotError> {
        let dates = records.dates.iter().copied();
        let values = records.values.iter().copied();
        match view {
            View::Strip => heatmap(dates, values, options).map(Plot::Heatmap),
            View::Month(month) => month_plot(dates, values, Some(month), options).map(Plot::Heatmap),
            View::Calendar { ncols } => {
                calendar_plot(dates, values, ncols, options).map(Plot::Calendar)
            }
        }
    }

    pub(crate) fn size(&self, style: &StyleConfig) -> (u16, u16) {
        match self {
            Plot::Heatmap(layout) => HeatmapWidget::new(layout, style).size(),
            Plot::Calendar(layout) => CalendarWidget::new(layout, style).size(),
        }
    }

    pub(crate) fn render(&self, style: &StyleConfig, area: Rect, buf: &mut Buffer) {
        match self {
            Plot::Heatmap(layout) => HeatmapWidget::new(layout, style).render(area, buf),
            Plot::Calendar(layout) => CalendarWidget::new(layout, style).render(area, buf),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct App {
    records: Records,
    view: View,
    options: PlotOptions,
    style: StyleConfig,
    plot: Plot,
    state: AppState,
}

impl App {
    pub(crate) fn new(
        records: Records,
        view: View,
        options: PlotOptions,
        style: StyleConfig,
    ) -> Result<App, PlotError> {
        let plot = Plot::build(view, &records, &options)?;
        Ok(App {
            records,
            view,
            options,
            style,
            plot,
            state: AppState::Plotting,
        })
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Plotting => match key {
                KeyCode::Char('t') => self.toggle_orientation(),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Plotting;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn toggle_orientation(&mut self) -> bool {
        let options = self
            .options
            .clone()
            .orientation(self.options.orientation.flipped());
        match Plot::build(self.view, &self.records, &options) {
            Ok(plot) => {
                debug!(orientation = ?options.orientation, "Switched orientation");
                self.options = options;
                self.plot = plot;
                true
            }
            Err(_) => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style.base_style());
        let (width, height) = self.plot.size(&self.style);
        let [plot_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [plot_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(plot_area);
        self.plot.render(&self.style, plot_area, buf);
        if self.state == AppState::Helping {
            Help {
                style: self.style.base_style(),
                orientation: self.options.orientation,
            }
            .render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Plotting,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_records;
    use calheat::Orientation;
    use ratatui::backend::TestBackend;

    fn records() -> Records {
        parse_records("2023-01-01 5\n2023-01-03 7\n").unwrap()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_strip_centered() {
        let mut app = App::new(
            records(),
            View::Strip,
            PlotOptions::default(),
            StyleConfig::default(),
        )
        .unwrap();
        assert_eq!(app.plot.size(&app.style), (38, 6));
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        assert!(row_text(&buffer, 8).trim().is_empty());
        assert_eq!(
            row_text(&buffer, 9).trim(),
            "Mo  Tu  We  Th  Fr  Sa  Su"
        );
        assert_eq!(buffer[(21 + 6, 9)].symbol(), "M");
        // Both labels sit beside the second week, centered on the two-week
        // span.
        assert_eq!(buffer[(21, 13)].symbol(), "2");
        assert_eq!(buffer[(21 + 35, 13)].symbol(), "J");
    }

    #[test]
    fn test_keys() {
        let mut app = App::new(
            records(),
            View::Calendar { ncols: 2 },
            PlotOptions::default(),
            StyleConfig::default(),
        )
        .unwrap();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(app.handle_key(KeyCode::Char('t')));
        assert_eq!(app.options.orientation, Orientation::Horizontal);
        let Plot::Calendar(ref layout) = app.plot else {
            panic!("calendar view produced a strip");
        };
        assert_eq!(layout.tiles[0].grid.shape(), (7, 6));
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Plotting);
        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.quitting());
    }

    #[test]
    fn test_draw_on_terminal() {
        let mut app = App::new(
            records(),
            View::Strip,
            PlotOptions::default(),
            StyleConfig::default(),
        )
        .unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.draw(&mut terminal).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(21 + 6, 9)].symbol(), "M");
        assert_eq!(buffer[(21, 13)].symbol(), "2");
    }

    #[test]
    fn test_month_view_missing_month() {
        let r = App::new(
            records(),
            View::Month(Month::June),
            PlotOptions::default(),
            StyleConfig::default(),
        );
        assert!(matches!(r, Err(PlotError::Month(_))));
    }
}
