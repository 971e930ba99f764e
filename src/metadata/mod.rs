//! EXIF metadata extraction.
//!
//! GPS fields are parsed into a named-field record in one explicit step,
//! so EXIF tag conventions stay confined to this module and everything
//! downstream works with plain structs.

use crate::error::{Error, Result};
use crate::geo::GpsTriple;
use exif::{In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parsed GPS position fields of one image.
///
/// Triples hold the numerators of the EXIF rationals; the fixed-point
/// scale of the decimal-minutes component is inferred during conversion
/// (see [`crate::geo::decimal_degrees`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsBlock {
    /// Latitude triple, non-negative in raw form.
    pub latitude: GpsTriple,
    /// Latitude hemisphere, `N` or `S`.
    pub latitude_ref: char,
    /// Longitude triple, non-negative in raw form.
    pub longitude: GpsTriple,
    /// Longitude hemisphere, `E` or `W`.
    pub longitude_ref: char,
}

/// Read and parse the EXIF container of an image file.
pub fn read_exif(path: &Path) -> Result<exif::Exif> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| Error::ExifRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Extract the GPS block from parsed EXIF data.
///
/// Distinguishes "not geotagged" (no GPS fields at all) from a missing
/// individual field; callers treat both as skip-image, never as fatal.
pub fn gps_block(exif: &exif::Exif, path: &Path) -> Result<GpsBlock> {
    let has_any_gps = [
        Tag::GPSLatitude,
        Tag::GPSLongitude,
        Tag::GPSLatitudeRef,
        Tag::GPSLongitudeRef,
    ]
    .iter()
    .any(|tag| exif.get_field(*tag, In::PRIMARY).is_some());

    if !has_any_gps {
        return Err(Error::NotGeotagged {
            path: path.to_path_buf(),
        });
    }

    let latitude = triple_field(exif, path, Tag::GPSLatitude, "GPSLatitude")?;
    let latitude_ref = ref_field(exif, path, Tag::GPSLatitudeRef, "GPSLatitudeRef")?;
    let longitude = triple_field(exif, path, Tag::GPSLongitude, "GPSLongitude")?;
    let longitude_ref = ref_field(exif, path, Tag::GPSLongitudeRef, "GPSLongitudeRef")?;

    Ok(GpsBlock {
        latitude,
        latitude_ref,
        longitude,
        longitude_ref,
    })
}

/// Read the GPS block of an image file in one step.
pub fn read_gps_block(path: &Path) -> Result<GpsBlock> {
    let exif = read_exif(path)?;
    gps_block(&exif, path)
}

/// Hour of day (0-23) of the image's capture timestamp.
///
/// Prefers `DateTimeOriginal`, falling back to `DateTime`.
pub fn capture_hour(exif: &exif::Exif, path: &Path) -> Result<u32> {
    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY))
        .ok_or_else(|| Error::TimestampMissing {
            path: path.to_path_buf(),
        })?;

    match field.value {
        Value::Ascii(ref vec) if !vec.is_empty() => {
            let dt = exif::DateTime::from_ascii(&vec[0]).map_err(|_| Error::TimestampParse {
                path: path.to_path_buf(),
                value: String::from_utf8_lossy(&vec[0]).into_owned(),
            })?;
            Ok(u32::from(dt.hour))
        }
        _ => Err(Error::TimestampMissing {
            path: path.to_path_buf(),
        }),
    }
}

/// Extract a degrees/minutes/decimal-minutes triple from a rational field.
pub fn parse_triple(value: &Value) -> Option<GpsTriple> {
    if let Value::Rational(rats) = value
        && rats.len() >= 3
    {
        // Numerators only: the decimal-minutes denominator is ignored and
        // the fixed-point scale inferred from the digit count downstream.
        return Some(GpsTriple::new(
            i64::from(rats[0].num),
            i64::from(rats[1].num),
            i64::from(rats[2].num),
        ));
    }
    None
}

fn triple_field(
    exif: &exif::Exif,
    path: &Path,
    tag: Tag,
    name: &'static str,
) -> Result<GpsTriple> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or_else(|| Error::GpsFieldMissing {
            path: path.to_path_buf(),
            field: name,
        })?;

    parse_triple(&field.value).ok_or_else(|| Error::GpsFieldMalformed {
        path: path.to_path_buf(),
        field: name,
    })
}

fn ref_field(exif: &exif::Exif, path: &Path, tag: Tag, name: &'static str) -> Result<char> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or_else(|| Error::GpsFieldMissing {
            path: path.to_path_buf(),
            field: name,
        })?;

    match field.value {
        Value::Ascii(ref vec) if !vec.is_empty() && !vec[0].is_empty() => {
            Ok(char::from(vec[0][0]).to_ascii_uppercase())
        }
        _ => Err(Error::GpsFieldMalformed {
            path: path.to_path_buf(),
            field: name,
        }),
    }
}
