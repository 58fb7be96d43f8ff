use calheat::Orientation;
use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static KEYS: &[(&str, &str)] = &[
    ("t", "Toggle orientation"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help {
    pub(crate) style: Style,
    pub(crate) orientation: Orientation,
}

impl Help {
    fn text(&self) -> Text<'static> {
        let mut lines = KEYS
            .iter()
            .map(|(keys, action)| Line::raw(format!("{keys:<10}{action}")))
            .collect::<Vec<_>>();
        let weeks_run = match self.orientation {
            Orientation::Vertical => "down",
            Orientation::Horizontal => "across",
        };
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("Weeks currently run {weeks_run}.")));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.style);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        Clear.render(help_area, buf);
        para.render(help_area, buf);
    }
}
