//! File organization utilities for timelapse image sets.
//!
//! Companions to the overlay pipeline: filename scrubbing/renumbering,
//! time-of-day subsetting, and frame decimation.

mod decimate;
mod rename;
mod subset;

pub use decimate::{DecimateOptions, TransferMethod, decimate};
pub use rename::{RenameOptions, rename_images};
pub use subset::{SubsetOptions, subset_by_hour};

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Collect files in `src` with the given extension, sorted by name.
///
/// If nothing matches the extension as given, its uppercase and lowercase
/// forms are tried before giving up, tolerating GoPro's `.JPG` versus
/// `.jpg`.
pub(crate) fn sorted_images(src: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !src.is_dir() {
        return Err(Error::NotADirectory {
            path: src.to_path_buf(),
        });
    }

    let candidates = [
        extension.to_string(),
        extension.to_uppercase(),
        extension.to_lowercase(),
    ];

    for candidate in &candidates {
        let mut files: Vec<PathBuf> = std::fs::read_dir(src)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext == OsStr::new(candidate.as_str()))
            })
            .collect();

        if !files.is_empty() {
            files.sort();
            return Ok(files);
        }
    }

    Err(Error::NoImagesFound {
        path: src.to_path_buf(),
        extension: extension.to_string(),
    })
}

/// Zero-padded sequential name for renumbering, width sized to the total.
pub(crate) fn renumbered_stem(index: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{index:0width$}")
}
