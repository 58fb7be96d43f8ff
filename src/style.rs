//! Immutable drawing configuration
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use thiserror::Error;

/// Names accepted by [`StyleConfig::with_option()`]
pub const OPTION_NAMES: [&str; 8] = [
    "facecolor",
    "edgecolor",
    "textcolor",
    "labelcolor",
    "cellwidth",
    "titlepad",
    "xmargin",
    "ymargin",
];

/// Narrowest cell that can still hold a two-digit day number
pub const MIN_CELL_WIDTH: u16 = 2;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StyleError {
    #[error("unknown style option {name:?}; valid options: {}", OPTION_NAMES.join(", "))]
    UnknownOption { name: String },
    #[error("invalid value {value:?} for style option {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StyleConfig {
    facecolor: Color,
    edgecolor: Color,
    textcolor: Color,
    labelcolor: Color,
    cellwidth: u16,
    titlepad: u16,
    xmargin: u16,
    ymargin: u16,
}

impl Default for StyleConfig {
    fn default() -> StyleConfig {
        StyleConfig {
            facecolor: Color::Black,
            edgecolor: Color::White,
            textcolor: Color::White,
            labelcolor: Color::White,
            cellwidth: 3,
            titlepad: 1,
            xmargin: 0,
            ymargin: 0,
        }
    }
}

impl StyleConfig {
    /// Return a copy of the configuration with the option `name` set to
    /// `value`.  Colors take any name or `#rrggbb` form understood by
    /// `ratatui`; sizes are nonnegative integers.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not one of [`OPTION_NAMES`] or if `value` is not
    /// valid for it.
    pub fn with_option(mut self, name: &str, value: &str) -> Result<StyleConfig, StyleError> {
        match name {
            "facecolor" => self.facecolor = parse_color("facecolor", value)?,
            "edgecolor" => self.edgecolor = parse_color("edgecolor", value)?,
            "textcolor" => self.textcolor = parse_color("textcolor", value)?,
            "labelcolor" => self.labelcolor = parse_color("labelcolor", value)?,
            "cellwidth" => {
                let width = parse_size("cellwidth", value)?;
                if width < MIN_CELL_WIDTH {
                    return Err(StyleError::InvalidValue {
                        name: "cellwidth",
                        value: value.to_owned(),
                        reason: format!("must be at least {MIN_CELL_WIDTH}"),
                    });
                }
                self.cellwidth = width;
            }
            "titlepad" => self.titlepad = parse_size("titlepad", value)?,
            "xmargin" => self.xmargin = parse_size("xmargin", value)?,
            "ymargin" => self.ymargin = parse_size("ymargin", value)?,
            _ => {
                return Err(StyleError::UnknownOption {
                    name: name.to_owned(),
                })
            }
        }
        Ok(self)
    }

    /// Apply each `(name, value)` pair in turn
    ///
    /// # Errors
    ///
    /// Fails on the first invalid pair.
    pub fn with_options<'a, I>(self, options: I) -> Result<StyleConfig, StyleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        options
            .into_iter()
            .try_fold(self, |style, (name, value)| style.with_option(name, value))
    }

    pub fn facecolor(&self) -> Color {
        self.facecolor
    }

    pub fn edgecolor(&self) -> Color {
        self.edgecolor
    }

    pub fn cellwidth(&self) -> u16 {
        self.cellwidth
    }

    pub fn titlepad(&self) -> u16 {
        self.titlepad
    }

    pub fn xmargin(&self) -> u16 {
        self.xmargin
    }

    pub fn ymargin(&self) -> u16 {
        self.ymargin
    }

    pub fn base_style(&self) -> Style {
        Style::new().fg(self.textcolor).bg(self.facecolor)
    }

    pub fn label_style(&self) -> Style {
        self.base_style()
            .fg(self.labelcolor)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        self.label_style()
    }

    pub fn edge_style(&self) -> Style {
        self.base_style().fg(self.edgecolor)
    }
}

fn parse_color(name: &'static str, value: &str) -> Result<Color, StyleError> {
    Color::from_str(value).map_err(|_| StyleError::InvalidValue {
        name,
        value: value.to_owned(),
        reason: String::from("not a recognized color"),
    })
}

fn parse_size(name: &'static str, value: &str) -> Result<u16, StyleError> {
    value.parse::<u16>().map_err(|e| StyleError::InvalidValue {
        name,
        value: value.to_owned(),
        reason: e.to_string(),
    })
}
