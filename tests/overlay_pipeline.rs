//! End-to-end tests of the overlay pipeline on synthetic geotagged JPEGs.

mod common;

use common::{ExifSpec, write_fixture_jpeg};
use mapstamp::geo::coordinates;
use mapstamp::metadata::read_gps_block;
use mapstamp::pipeline::{OverlayOptions, overlay_directory};
use mapstamp::render::{TrackStyle, parse_color};
use std::path::Path;

fn geotag(lat: (u32, u32, u32), lon: (u32, u32, u32)) -> ExifSpec {
    ExifSpec {
        gps: Some((lat, 'N', lon, 'W')),
        datetime: None,
    }
}

fn options() -> OverlayOptions {
    OverlayOptions {
        map_size: 20,
        map_dpi: 50,
        map_x: 1.0,
        map_y: 1.0,
        style: TrackStyle {
            line_width: 2.0,
            line_color: parse_color("blue").unwrap(),
            point_size: 12.0,
            point_color: parse_color("red").unwrap(),
            breadcrumb_size: 6.0,
            breadcrumb_color: parse_color("gray").unwrap(),
            background_alpha: 0.25,
        },
        breadcrumbs: false,
        keep_map: false,
        dry_run: false,
        progress_enabled: false,
    }
}

fn populate_track(dir: &Path) {
    write_fixture_jpeg(
        &dir.join("img_001.jpg"),
        &geotag((44, 11, 102_872_399), (94, 0, 178_621_199)),
    );
    write_fixture_jpeg(
        &dir.join("img_002.jpg"),
        &geotag((44, 12, 500_000_000), (94, 1, 250_000_000)),
    );
    write_fixture_jpeg(
        &dir.join("img_003.jpg"),
        &geotag((44, 13, 750_000_000), (94, 2, 125_000_000)),
    );
}

#[test]
fn test_gps_block_roundtrip_matches_reference_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ref.jpg");
    write_fixture_jpeg(&path, &geotag((44, 11, 102_872_399), (94, 0, 178_621_199)));

    let block = read_gps_block(&path).unwrap();
    let coord = coordinates(&block);
    assert!((coord.latitude - 44.18504787331667).abs() < 1e-12);
    assert!((coord.longitude - -94.00297701998333).abs() < 1e-12);
}

#[test]
fn test_overlay_writes_composites_and_cleans_intermediates() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());

    let result = overlay_directory(dir.path(), &options()).unwrap();
    assert_eq!(result.rendered, 3);
    assert_eq!(result.skipped, 0);

    for stem in ["img_001", "img_002", "img_003"] {
        assert!(dir.path().join(format!("{stem}_map.JPG")).exists());
        assert!(!dir.path().join(format!("{stem}_transparent.png")).exists());
        // Originals untouched.
        assert!(dir.path().join(format!("{stem}.jpg")).exists());
    }
}

#[test]
fn test_overlay_skips_untagged_images_with_count() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());
    // Two valid JPEGs without any GPS metadata.
    write_fixture_jpeg(&dir.path().join("plain_a.jpg"), &ExifSpec::default());
    write_fixture_jpeg(&dir.path().join("plain_b.jpg"), &ExifSpec::default());

    let result = overlay_directory(dir.path(), &options()).unwrap();
    assert_eq!(result.rendered, 3);
    assert_eq!(result.skipped, 2);
    assert!(!dir.path().join("plain_a_map.JPG").exists());
}

#[test]
fn test_overlay_dry_run_writes_nothing_permanent() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());

    let opts = OverlayOptions {
        dry_run: true,
        ..options()
    };
    let result = overlay_directory(dir.path(), &opts).unwrap();
    assert_eq!(result.rendered, 3);

    assert!(!dir.path().join("img_001_map.JPG").exists());
    assert!(!dir.path().join("img_001_transparent.png").exists());
}

#[test]
fn test_overlay_keep_map_retains_intermediates() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());

    let opts = OverlayOptions {
        keep_map: true,
        ..options()
    };
    overlay_directory(dir.path(), &opts).unwrap();

    assert!(dir.path().join("img_001_transparent.png").exists());
    assert!(dir.path().join("img_001_map.JPG").exists());
}

#[test]
fn test_overlay_with_breadcrumbs() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());

    let opts = OverlayOptions {
        breadcrumbs: true,
        ..options()
    };
    let result = overlay_directory(dir.path(), &opts).unwrap();
    assert_eq!(result.rendered, 3);
}

#[test]
fn test_overlay_output_dimensions_match_source() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());

    overlay_directory(dir.path(), &options()).unwrap();

    let out = image::open(dir.path().join("img_001_map.JPG")).unwrap();
    assert_eq!(out.width(), 32);
    assert_eq!(out.height(), 24);
}

#[test]
fn test_overlay_errors_when_nothing_geotagged() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_jpeg(&dir.path().join("plain.jpg"), &ExifSpec::default());

    let result = overlay_directory(dir.path(), &options());
    assert!(matches!(
        result,
        Err(mapstamp::Error::NoGeotaggedImages { .. })
    ));
}

#[test]
fn test_overlay_second_run_ignores_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    populate_track(dir.path());

    let first = overlay_directory(dir.path(), &options()).unwrap();
    let second = overlay_directory(dir.path(), &options()).unwrap();
    assert_eq!(first.rendered, second.rendered);
}
