//! EXIF coordinate triple to decimal degree conversion.

use super::{Coordinate, GpsTriple};
use crate::constants::gps::{MIN_SCALE_DIGITS, MINUTES_PER_DEGREE};
use crate::metadata::GpsBlock;

/// Number of base-10 digits in the fixed-point decimal-minutes value.
fn digit_count(value: i64) -> u32 {
    if value == 0 {
        1
    } else {
        value.unsigned_abs().ilog10() + 1
    }
}

/// Convert a degrees / minutes / decimal-minutes triple to decimal degrees.
///
/// The decimal-point position of `decimal_minutes` is implied by its digit
/// count: a nine-digit value scales by 10^-9, so `102872980` contributes
/// `0.102872980` minutes. Values shorter than three digits still scale by
/// 10^-3 (the minimum padding width); the heuristic is format-dependent
/// and unverified against non-GoPro EXIF encoders, so it is kept exactly
/// as documented rather than generalized.
///
/// Negative `degrees` subtract the minutes offset instead of adding it,
/// which is how hemisphere pre-negation propagates through the conversion.
pub fn decimal_degrees(triple: GpsTriple) -> f64 {
    let exponent = digit_count(triple.decimal_minutes).max(MIN_SCALE_DIGITS);

    // Operation order matters: scale-then-multiply reproduces the
    // documented coordinate vectors bit-exactly.
    #[allow(clippy::cast_possible_wrap)]
    let scale = 1.0 / 10f64.powi(exponent as i32);

    #[allow(clippy::cast_precision_loss)]
    let combined_minutes = triple.minutes as f64 + scale * triple.decimal_minutes as f64;

    #[allow(clippy::cast_precision_loss)]
    let degrees = triple.degrees as f64;

    if triple.degrees < 0 {
        degrees - combined_minutes / MINUTES_PER_DEGREE
    } else {
        degrees + combined_minutes / MINUTES_PER_DEGREE
    }
}

/// Convert a parsed EXIF GPS block to a decimal-degree coordinate.
///
/// The hemisphere reference negates the first element of the triple before
/// conversion, not the converted result. The distinction is observable in
/// the fractional part and must be preserved for compatibility with
/// recorded coordinate vectors.
pub fn coordinates(block: &GpsBlock) -> Coordinate {
    let mut lat = block.latitude;
    if block.latitude_ref == 'S' {
        lat.degrees = -lat.degrees;
    }

    let mut lon = block.longitude;
    if block.longitude_ref == 'W' {
        lon.degrees = -lon.degrees;
    }

    Coordinate {
        latitude: decimal_degrees(lat),
        longitude: decimal_degrees(lon),
    }
}
