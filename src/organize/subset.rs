//! Time-of-day subsetting of timelapse images.

use crate::error::{Error, Result};
use crate::metadata::{capture_hour, read_exif};
use crate::organize::{RenameOptions, rename_images, sorted_images};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options for a subset run.
#[derive(Debug, Clone)]
pub struct SubsetOptions {
    /// First hour of day to include (0-23, inclusive).
    pub start_hour: u32,
    /// Last hour of day to include (0-23, inclusive).
    pub end_hour: u32,
    /// Extension matched against input files.
    pub extension: String,
    /// Renumber the copied files sequentially afterwards.
    pub renumber: bool,
    /// Log intended actions without touching any file.
    pub dry_run: bool,
}

/// Copy images captured between two hours of day into a new directory.
///
/// The capture hour comes from the EXIF timestamp (`DateTimeOriginal`,
/// falling back to `DateTime`); images without a readable timestamp are
/// skipped with a warning. Returns the number of files copied.
pub fn subset_by_hour(src: &Path, dst: &Path, options: &SubsetOptions) -> Result<usize> {
    if options.start_hour > options.end_hour {
        return Err(Error::ConfigValidation {
            message: format!(
                "start hour {} is after end hour {}",
                options.start_hour, options.end_hour
            ),
        });
    }

    let files = sorted_images(src, &options.extension)?;
    let matched = select_by_hour(&files, options.start_hour, options.end_hour);

    if matched.is_empty() {
        return Err(Error::NoImagesInTimeRange {
            path: src.to_path_buf(),
            start: options.start_hour,
            end: options.end_hour,
        });
    }

    if options.dry_run {
        for file in &matched {
            info!("Dryrun: copy {} to {}", file.display(), dst.display());
        }
        return Ok(matched.len());
    }

    if !dst.exists() {
        info!("Creating directory {}", dst.display());
        std::fs::create_dir_all(dst).map_err(|e| Error::OutputDirCreate {
            path: dst.to_path_buf(),
            source: e,
        })?;
    }

    for file in &matched {
        let file_name = file.file_name().map_or_else(
            || std::borrow::Cow::Borrowed("output"),
            |n| n.to_string_lossy(),
        );
        let target = dst.join(file_name.as_ref());
        std::fs::copy(file, &target).map_err(|e| Error::FileTransfer {
            action: "copy",
            from: file.clone(),
            to: target.clone(),
            source: e,
        })?;
    }

    if options.renumber {
        let rename_options = RenameOptions {
            dst: None,
            extension: options.extension.clone(),
            move_files: true,
            renumber: true,
            dry_run: false,
        };
        rename_images(dst, &rename_options)?;
    }

    Ok(matched.len())
}

fn select_by_hour(files: &[PathBuf], start: u32, end: u32) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|file| match hour_of(file) {
            Ok(hour) => (start..=end).contains(&hour),
            Err(e) => {
                warn!("Skipping {}: {e}", file.display());
                false
            }
        })
        .cloned()
        .collect()
}

fn hour_of(file: &Path) -> Result<u32> {
    let exif = read_exif(file)?;
    capture_hour(&exif, file)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_rejects_inverted_hours() {
        let dir = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let options = SubsetOptions {
            start_hour: 17,
            end_hour: 9,
            extension: "jpg".to_string(),
            renumber: false,
            dry_run: false,
        };

        assert!(matches!(
            subset_by_hour(dir.path(), dst.path(), &options),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_subset_errors_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        // Plain bytes: no EXIF, so every file is skipped with a warning and
        // the range ends up empty.
        std::fs::write(dir.path().join("a.jpg"), b"not a real jpeg").unwrap();
        let dst = tempfile::tempdir().unwrap();

        let options = SubsetOptions {
            start_hour: 9,
            end_hour: 17,
            extension: "jpg".to_string(),
            renumber: false,
            dry_run: false,
        };

        assert!(matches!(
            subset_by_hour(dir.path(), dst.path(), &options),
            Err(Error::NoImagesInTimeRange { .. })
        ));
    }
}
