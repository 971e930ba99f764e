//! Input collection and track record assembly.

use crate::constants::{images, suffixes};
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One geotagged image of the track, in capture order.
#[derive(Debug, Clone)]
pub struct TrackEntry {
    /// Path to the source image.
    pub path: PathBuf,
    /// Position extracted from the image's EXIF GPS block.
    pub coordinate: Coordinate,
}

/// The shared track of one overlay run.
///
/// Built once from the extraction pass and read-only afterward. Images
/// without usable GPS metadata are never present, not even as null entries.
#[derive(Debug, Default)]
pub struct TrackRecord {
    /// Geotagged images in input order.
    pub entries: Vec<TrackEntry>,
    /// Number of images skipped for missing or malformed GPS metadata.
    pub skipped: usize,
}

impl TrackRecord {
    /// Assemble the record from per-image extraction results.
    ///
    /// Recoverable metadata failures are logged as warnings and counted;
    /// any other failure aborts the run.
    pub fn collect<I>(results: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PathBuf, Result<Coordinate>)>,
    {
        let mut record = Self::default();

        for (path, result) in results {
            match result {
                Ok(coordinate) => record.entries.push(TrackEntry { path, coordinate }),
                Err(e) if e.is_skippable() => {
                    warn!("Skipping: could not extract coordinates from {}: {e}", path.display());
                    record.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(record)
    }

    /// All coordinates of the track, in order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.entries.iter().map(|e| e.coordinate).collect()
    }
}

/// Collect overlay input images from a directory, sorted by file name.
pub fn collect_image_files(src: &Path) -> Result<Vec<PathBuf>> {
    if !src.is_dir() {
        return Err(Error::NotADirectory {
            path: src.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_overlay_input(&path) && !is_pipeline_output(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Error::NoImagesFound {
            path: src.to_path_buf(),
            extension: images::DEFAULT_EXTENSION.to_string(),
        });
    }

    files.sort();
    Ok(files)
}

/// Path of the intermediate transparent raster for an input image.
pub fn transparent_output_path(input: &Path) -> PathBuf {
    with_suffix(input, suffixes::TRANSPARENT)
}

/// Path of the final composited image for an input image.
pub fn map_output_path(input: &Path) -> PathBuf {
    with_suffix(input, suffixes::MAP)
}

fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );
    input.with_file_name(format!("{stem}{suffix}"))
}

fn is_overlay_input(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        images::OVERLAY_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(OsStr::new(candidate)))
    })
}

/// Outputs of an earlier run must not be picked up as inputs again.
fn is_pipeline_output(path: &Path) -> bool {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .is_some_and(|stem| stem.ends_with("_map") || stem.ends_with("_transparent"))
}
