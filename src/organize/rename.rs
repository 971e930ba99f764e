//! Filename scrubbing and renumbering.

use crate::error::{Error, Result};
use crate::organize::{renumbered_stem, sorted_images};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for a rename run.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Destination directory; in-place (beside the source) when absent.
    pub dst: Option<PathBuf>,
    /// Extension matched against input files.
    pub extension: String,
    /// Move files instead of copying.
    pub move_files: bool,
    /// Replace each filename with a zero-padded sequential number.
    pub renumber: bool,
    /// Log intended actions without touching any file.
    pub dry_run: bool,
}

/// Scrub timelapse-cam special characters from filenames, or renumber.
///
/// The default scrub removes the `:`/`-`/`_` characters some timelapse
/// cameras put into timestamps-as-filenames. Returns the number of files
/// processed.
pub fn rename_images(src: &Path, options: &RenameOptions) -> Result<usize> {
    let files = sorted_images(src, &options.extension)?;
    let total = files.len();

    if let Some(dst) = &options.dst
        && !options.dry_run
    {
        std::fs::create_dir_all(dst).map_err(|e| Error::OutputDirCreate {
            path: dst.clone(),
            source: e,
        })?;
    }

    for (index, file) in files.iter().enumerate() {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let new_stem = if options.renumber {
            renumbered_stem(index + 1, total)
        } else {
            scrub(&stem)
        };

        let mut file_name = new_stem;
        if let Some(ext) = file.extension() {
            file_name.push('.');
            file_name.push_str(&ext.to_string_lossy());
        }

        let out_dir = options
            .dst
            .as_deref()
            .or_else(|| file.parent())
            .unwrap_or_else(|| Path::new("."));
        let target = out_dir.join(file_name);

        if options.dry_run {
            info!("Dryrun: copy {} to {}", file.display(), target.display());
            continue;
        }

        if options.move_files {
            std::fs::rename(file, &target).map_err(|e| Error::FileTransfer {
                action: "move",
                from: file.clone(),
                to: target.clone(),
                source: e,
            })?;
        } else {
            std::fs::copy(file, &target).map_err(|e| Error::FileTransfer {
                action: "copy",
                from: file.clone(),
                to: target.clone(),
                source: e,
            })?;
        }
    }

    Ok(total)
}

/// Remove the separator characters timelapse cameras insert into names.
fn scrub(stem: &str) -> String {
    stem.chars().filter(|c| !matches!(c, ':' | '-' | '_')).collect()
}
