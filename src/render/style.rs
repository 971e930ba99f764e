//! Track rendering style and color parsing.

use crate::error::{Error, Result};
use tiny_skia::Color;

/// Visual parameters of the rendered track map.
#[derive(Debug, Clone, Copy)]
pub struct TrackStyle {
    /// Track line width in pixels.
    pub line_width: f32,
    /// Track line color.
    pub line_color: Color,
    /// Current-position marker diameter in points.
    pub point_size: f32,
    /// Current-position marker color.
    pub point_color: Color,
    /// Breadcrumb marker diameter in points.
    pub breadcrumb_size: f32,
    /// Breadcrumb marker color.
    pub breadcrumb_color: Color,
    /// Map background alpha in [0.0, 1.0].
    pub background_alpha: f32,
}

/// Parse a color from a name or a `#rrggbb` / `#rgb` hex string.
///
/// The named palette follows matplotlib's default-cycle shades, which is
/// what the config defaults ("blue", "red", "gray") refer to.
pub fn parse_color(value: &str) -> Result<Color> {
    let trimmed = value.trim();

    let named = match trimmed.to_ascii_lowercase().as_str() {
        "black" => Some((0, 0, 0)),
        "white" => Some((255, 255, 255)),
        "red" => Some((214, 39, 40)),
        "green" => Some((44, 160, 44)),
        "blue" => Some((31, 119, 180)),
        "orange" => Some((255, 127, 14)),
        "yellow" => Some((255, 221, 35)),
        "purple" => Some((148, 103, 189)),
        "cyan" => Some((23, 190, 207)),
        "magenta" => Some((227, 119, 194)),
        "gray" | "grey" => Some((127, 127, 127)),
        _ => None,
    };

    if let Some((r, g, b)) = named {
        return Ok(Color::from_rgba8(r, g, b, 255));
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::InvalidColor {
            value: value.to_string(),
        });
    }

    Err(Error::InvalidColor {
        value: value.to_string(),
    })
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::from_rgba8(r * 17, g * 17, b * 17, 255))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::from_rgba8(r, g, b, 255))
        }
        _ => None,
    }
}
