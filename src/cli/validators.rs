//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing. Range errors are
//! caught here, before any image is touched.

use crate::render::parse_color;

/// Parse and validate a placement fraction (0.0-1.0).
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} not in range [0.0, 1.0]"));
    }

    Ok(value)
}

/// Parse and validate a background alpha (0.0-1.0).
pub fn parse_alpha(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} not in range [0.0, 1.0]"));
    }

    Ok(value)
}

/// Parse and validate a map size percentage, (0, 100].
pub fn parse_map_size(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid integer"))?;

    if value == 0 || value > 100 {
        return Err(format!("{value} not in range (0, 100]"));
    }

    Ok(value)
}

/// Parse and validate a strictly positive size (line width, marker size).
pub fn parse_positive_size(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value <= 0.0 {
        return Err(format!("size must be positive, got {value}"));
    }

    Ok(value)
}

/// Validate a color specification eagerly, keeping the raw string.
pub fn parse_color_spec(s: &str) -> Result<String, String> {
    parse_color(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}
