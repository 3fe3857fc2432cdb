// File: crates/chart-core/src/theme.rs
// Summary: Colors and default series styling (light/dark presets).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Hex without alpha, for SVG paint attributes.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex_rgb())
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| format!("bad hex color '{s}'"));
        }
        let lower = s.to_ascii_lowercase();
        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("unsupported color '{s}'"))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let channel = |p: &str| p.parse::<u8>().map_err(|_| format!("bad channel '{p}' in '{s}'"));
        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let a: f64 = a.parse().map_err(|_| format!("bad alpha '{a}' in '{s}'"))?;
                let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
                Ok(Self::from_argb(a, channel(r)?, channel(g)?, channel(b)?))
            }
            _ => Err(format!("expected 3 or 4 channels in '{s}'")),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Default styling applied when a series descriptor does not override it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub label: Color,
    pub actual: Color,
    pub forecast: Color,
    pub other: Color,
    pub band_fill: Color,
    pub actual_width: f64,
    pub line_width: f64,
    pub forecast_dashed: bool,
    /// Dash and gap lengths for dashed lines.
    pub dash: [f64; 2],
    pub font_size: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xff, 0xff, 0xff),
            grid: Color::rgb(0xe5, 0xe7, 0xeb),
            axis_line: Color::rgb(0x9c, 0xa3, 0xaf),
            label: Color::rgb(0x6b, 0x72, 0x80),
            actual: Color::rgb(0x11, 0x18, 0x27),
            forecast: Color::rgb(0xd9, 0x77, 0x06),
            other: Color::rgb(0x25, 0x63, 0xeb),
            band_fill: Color::from_argb(51, 34, 197, 94), // 20% green
            actual_width: 2.25,
            line_width: 1.75,
            forecast_dashed: false,
            dash: [4.0, 3.0],
            font_size: 11.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            label: Color::rgb(210, 210, 220),
            actual: Color::rgb(235, 235, 245),
            forecast: Color::rgb(0xf5, 0x9e, 0x0b),
            other: Color::rgb(64, 160, 255),
            band_fill: Color::from_argb(64, 40, 200, 120),
            ..Self::light()
        }
    }

    /// Classical-forecast look: forecasts in slate and dashed.
    pub fn classical() -> Self {
        Self {
            name: "classical",
            forecast: Color::rgb(0x1f, 0x29, 0x37),
            forecast_dashed: true,
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::classical()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
