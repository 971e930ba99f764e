//! Geospatial conversion and map layout math.

mod convert;
mod layout;

pub use convert::{coordinates, decimal_degrees};
pub use layout::{canvas_dimensions, placement_offset};

/// A position in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub latitude: f64,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub longitude: f64,
}

/// A raw EXIF-style degrees / minutes / decimal-minutes coordinate triple.
///
/// Values are the numerators of the EXIF rationals; `decimal_minutes`
/// carries an implied decimal scale derived from its digit count (see
/// [`decimal_degrees`]). Degrees are non-negative in raw EXIF form; the
/// hemisphere reference flips the sign before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsTriple {
    /// Whole degrees.
    pub degrees: i64,
    /// Whole minutes.
    pub minutes: i64,
    /// Fractional minutes as a fixed-point integer.
    pub decimal_minutes: i64,
}

impl GpsTriple {
    /// Construct a triple from its three components.
    pub const fn new(degrees: i64, minutes: i64, decimal_minutes: i64) -> Self {
        Self {
            degrees,
            minutes,
            decimal_minutes,
        }
    }
}
