//! Mapping of cell values to colors
use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Perceived brightness on a scale of 0 to 255
    pub fn luma(self) -> u8 {
        let Rgb(r, g, b) = self;
        let y = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
        u8::try_from(y).unwrap_or(u8::MAX)
    }
}

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Color {
        Color::Rgb(r, g, b)
    }
}

/// How the stops of a palette are turned into a continuous scale
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Blend {
    /// Interpolate linearly between neighboring stops
    Gradient,
    /// Split the range into equal buckets, one per stop
    Listed,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NamedPalette {
    Github,
    Greens,
    July,
    Sunset,
    Golden,
}

impl NamedPalette {
    pub const ALL: [NamedPalette; 5] = [
        NamedPalette::Github,
        NamedPalette::Greens,
        NamedPalette::July,
        NamedPalette::Sunset,
        NamedPalette::Golden,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedPalette::Github => "github",
            NamedPalette::Greens => "greens",
            NamedPalette::July => "july",
            NamedPalette::Sunset => "sunset",
            NamedPalette::Golden => "golden",
        }
    }

    pub fn blend(self) -> Blend {
        match self {
            NamedPalette::Github => Blend::Listed,
            _ => Blend::Gradient,
        }
    }

    /// Color stops from low to high
    pub fn stops(self) -> &'static [Rgb] {
        match self {
            NamedPalette::Github => &[
                Rgb(235, 237, 240),
                Rgb(155, 233, 168),
                Rgb(64, 196, 99),
                Rgb(48, 161, 78),
                Rgb(33, 110, 57),
            ],
            NamedPalette::Greens => &[
                Rgb(247, 252, 245),
                Rgb(199, 233, 192),
                Rgb(116, 196, 118),
                Rgb(35, 139, 69),
                Rgb(0, 68, 27),
            ],
            NamedPalette::July => &[
                Rgb(255, 255, 237),
                Rgb(255, 255, 212),
                Rgb(245, 238, 186),
                Rgb(249, 217, 174),
                Rgb(254, 187, 152),
                Rgb(255, 141, 130),
                Rgb(230, 97, 97),
                Rgb(204, 71, 71),
            ],
            NamedPalette::Sunset => &[
                Rgb(255, 229, 119),
                Rgb(254, 192, 81),
                Rgb(255, 136, 102),
                Rgb(253, 96, 81),
                Rgb(57, 32, 51),
            ],
            NamedPalette::Golden => &[
                Rgb(255, 254, 253),
                Rgb(254, 238, 170),
                Rgb(253, 197, 93),
                Rgb(237, 143, 76),
                Rgb(182, 97, 66),
                Rgb(129, 76, 61),
            ],
        }
    }
}

impl fmt::Display for NamedPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color scale, either one of the built-in ones or caller-supplied
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Palette {
    Named { palette: NamedPalette, reversed: bool },
    Custom { stops: Vec<Rgb>, blend: Blend },
}

impl Palette {
    /// Reverse the direction of the scale
    pub fn reversed(self) -> Palette {
        match self {
            Palette::Named { palette, reversed } => Palette::Named {
                palette,
                reversed: !reversed,
            },
            Palette::Custom { mut stops, blend } => {
                stops.reverse();
                Palette::Custom { stops, blend }
            }
        }
    }

    fn blend(&self) -> Blend {
        match self {
            Palette::Named { palette, .. } => palette.blend(),
            Palette::Custom { blend, .. } => *blend,
        }
    }

    fn stops(&self) -> Vec<Rgb> {
        match self {
            Palette::Named { palette, reversed } => {
                let mut stops = palette.stops().to_vec();
                if *reversed {
                    stops.reverse();
                }
                stops
            }
            Palette::Custom { stops, .. } => stops.clone(),
        }
    }

    /// The color at fraction `t` (clamped to `0.0..=1.0`) along the scale
    pub fn color_at(&self, t: f64) -> Rgb {
        let stops = self.stops();
        let Some(&first) = stops.first() else {
            return Rgb(0, 0, 0);
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = stops.len();
        match self.blend() {
            Blend::Listed => stops[scale_index(t * to_f64(n)).min(n - 1)],
            Blend::Gradient if n == 1 => first,
            Blend::Gradient => {
                let pos = t * to_f64(n - 1);
                let i = scale_index(pos).min(n - 2);
                lerp(stops[i], stops[i + 1], pos - to_f64(i))
            }
        }
    }

    /// The color for `value` on a scale running from `lo` to `hi`
    pub fn color_for(&self, value: f64, (lo, hi): (f64, f64)) -> Rgb {
        let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.0 };
        self.color_at(t)
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::Named {
            palette: NamedPalette::Greens,
            reversed: false,
        }
    }
}

impl From<NamedPalette> for Palette {
    fn from(palette: NamedPalette) -> Palette {
        Palette::Named {
            palette,
            reversed: false,
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown palette {name:?}; valid palettes: {}", valid_names())]
pub struct UnknownPaletteError {
    pub name: String,
}

fn valid_names() -> String {
    NamedPalette::ALL
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Palette {
    type Err = UnknownPaletteError;

    /// Parse a palette name, optionally suffixed with `_r` to reverse it
    fn from_str(s: &str) -> Result<Palette, UnknownPaletteError> {
        let lower = s.to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        NamedPalette::ALL
            .into_iter()
            .find(|p| p.name() == base)
            .map(|palette| Palette::Named { palette, reversed })
            .ok_or_else(|| UnknownPaletteError { name: s.to_owned() })
    }
}

fn to_f64(i: usize) -> f64 {
    f64::from(u32::try_from(i).unwrap_or(u32::MAX))
}

// `x` must be nonnegative and not NaN.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_index(x: f64) -> usize {
    x.floor() as usize
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(Rgb(r1, g1, b1): Rgb, Rgb(r2, g2, b2): Rgb, t: f64) -> Rgb {
    let mix = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("github".parse::<Palette>(), Ok(NamedPalette::Github.into()));
        assert_eq!(
            "Sunset_r".parse::<Palette>(),
            Ok(Palette::Named {
                palette: NamedPalette::Sunset,
                reversed: true
            })
        );
        let e = "viridis".parse::<Palette>().unwrap_err();
        assert_eq!(
            e.to_string(),
            "unknown palette \"viridis\"; valid palettes: github, greens, july, sunset, golden"
        );
    }

    #[test]
    fn test_gradient_endpoints() {
        let p = Palette::from(NamedPalette::Greens);
        assert_eq!(p.color_at(0.0), Rgb(247, 252, 245));
        assert_eq!(p.color_at(1.0), Rgb(0, 68, 27));
        assert_eq!(p.color_at(2.0), Rgb(0, 68, 27));
        assert_eq!(p.color_at(0.25), Rgb(199, 233, 192));
        assert_eq!(p.clone().reversed().color_at(0.0), Rgb(0, 68, 27));
    }

    #[test]
    fn test_gradient_midpoint() {
        let p = Palette::Custom {
            stops: vec![Rgb(0, 0, 0), Rgb(200, 100, 50)],
            blend: Blend::Gradient,
        };
        assert_eq!(p.color_at(0.5), Rgb(100, 50, 25));
    }

    #[test]
    fn test_listed_buckets() {
        let p = Palette::from(NamedPalette::Github);
        assert_eq!(p.color_for(0.0, (0.0, 10.0)), Rgb(235, 237, 240));
        assert_eq!(p.color_for(1.9, (0.0, 10.0)), Rgb(235, 237, 240));
        assert_eq!(p.color_for(2.0, (0.0, 10.0)), Rgb(155, 233, 168));
        assert_eq!(p.color_for(10.0, (0.0, 10.0)), Rgb(33, 110, 57));
    }

    #[test]
    fn test_flat_range() {
        let p = Palette::from(NamedPalette::Greens);
        assert_eq!(p.color_for(5.0, (5.0, 5.0)), Rgb(247, 252, 245));
    }

    #[test]
    fn test_luma() {
        assert_eq!(Rgb(255, 255, 255).luma(), 255);
        assert_eq!(Rgb(0, 0, 0).luma(), 0);
        assert!(Rgb(0, 68, 27).luma() < 128);
    }
}
