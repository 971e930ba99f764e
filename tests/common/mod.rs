//! Shared fixture builders for integration tests.
//!
//! Builds small JPEGs with a real EXIF APP1 segment so the pipeline can be
//! exercised end to end without binary fixtures in the repository.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Degrees / minutes / scaled decimal-minutes, GoPro-style rationals.
pub type RawTriple = (u32, u32, u32);

/// EXIF fields to embed into a fixture image.
#[derive(Default)]
pub struct ExifSpec {
    pub gps: Option<(RawTriple, char, RawTriple, char)>,
    pub datetime: Option<&'static str>,
}

/// Write a small JPEG with the given EXIF fields to `path`.
pub fn write_fixture_jpeg(path: &Path, spec: &ExifSpec) {
    let mut jpeg = Vec::new();
    let img = RgbImage::from_pixel(32, 24, Rgb([90, 120, 160]));
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .unwrap();

    // No EXIF fields requested: write the bare JPEG, no APP1 segment.
    if spec.gps.is_none() && spec.datetime.is_none() {
        std::fs::write(path, jpeg).unwrap();
        return;
    }

    let exif_payload = build_exif(spec);
    std::fs::write(path, splice_app1(&jpeg, &exif_payload)).unwrap();
}

fn rational_triple(values: RawTriple, scale_denom: u32) -> Value {
    Value::Rational(vec![
        Rational {
            num: values.0,
            denom: 1,
        },
        Rational {
            num: values.1,
            denom: 1,
        },
        Rational {
            num: values.2,
            denom: scale_denom,
        },
    ])
}

fn ascii(value: &str) -> Value {
    Value::Ascii(vec![value.as_bytes().to_vec()])
}

fn build_exif(spec: &ExifSpec) -> Vec<u8> {
    let mut fields = Vec::new();

    if let Some((lat, lat_ref, lon, lon_ref)) = &spec.gps {
        fields.push(Field {
            tag: Tag::GPSLatitude,
            ifd_num: In::PRIMARY,
            value: rational_triple(*lat, 10_000_000),
        });
        fields.push(Field {
            tag: Tag::GPSLatitudeRef,
            ifd_num: In::PRIMARY,
            value: ascii(&lat_ref.to_string()),
        });
        fields.push(Field {
            tag: Tag::GPSLongitude,
            ifd_num: In::PRIMARY,
            value: rational_triple(*lon, 10_000_000),
        });
        fields.push(Field {
            tag: Tag::GPSLongitudeRef,
            ifd_num: In::PRIMARY,
            value: ascii(&lon_ref.to_string()),
        });
    }

    if let Some(datetime) = spec.datetime {
        fields.push(Field {
            tag: Tag::DateTimeOriginal,
            ifd_num: In::PRIMARY,
            value: ascii(datetime),
        });
    }

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }

    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, false).unwrap();
    buf.into_inner()
}

/// Insert an Exif APP1 segment right after the JPEG SOI marker.
fn splice_app1(jpeg: &[u8], exif_payload: &[u8]) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "fixture is not a JPEG");

    let body_len = exif_payload.len() + 6 + 2; // "Exif\0\0" + length field
    assert!(body_len <= u16::MAX as usize);

    let mut out = Vec::with_capacity(jpeg.len() + body_len + 2);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&(body_len as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(exif_payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}
