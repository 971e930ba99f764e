//! Frame decimation by keep factor.

use crate::error::{Error, Result};
use crate::organize::sorted_images;
use std::path::Path;
use tracing::info;

/// How kept frames are transferred to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TransferMethod {
    /// Hard-link into the destination (no extra disk space).
    #[default]
    Link,
    /// Copy into the destination.
    Copy,
}

impl std::fmt::Display for TransferMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Link => write!(f, "link"),
            Self::Copy => write!(f, "copy"),
        }
    }
}

/// Options for a decimation run.
#[derive(Debug, Clone)]
pub struct DecimateOptions {
    /// Keep every n-th frame (1 keeps everything).
    pub keep_factor: usize,
    /// Extension matched against input files.
    pub extension: String,
    /// Transfer method for kept frames.
    pub transfer: TransferMethod,
    /// Log intended actions without touching any file.
    pub dry_run: bool,
}

/// Thin a name-sorted image sequence, keeping every n-th frame.
///
/// Returns the number of frames kept.
pub fn decimate(src: &Path, dst: &Path, options: &DecimateOptions) -> Result<usize> {
    if options.keep_factor == 0 {
        return Err(Error::ConfigValidation {
            message: "keep factor must be at least 1".to_string(),
        });
    }

    let files = sorted_images(src, &options.extension)?;

    if !options.dry_run && !dst.exists() {
        std::fs::create_dir_all(dst).map_err(|e| Error::OutputDirCreate {
            path: dst.to_path_buf(),
            source: e,
        })?;
    }

    let mut kept = 0;
    for (index, file) in files.iter().enumerate() {
        if index % options.keep_factor != 0 {
            continue;
        }

        let file_name = file.file_name().map_or_else(
            || std::borrow::Cow::Borrowed("output"),
            |n| n.to_string_lossy(),
        );
        let target = dst.join(file_name.as_ref());
        info!("'{}' {} to {}", options.transfer, file.display(), target.display());

        if !options.dry_run {
            match options.transfer {
                TransferMethod::Link => {
                    std::fs::hard_link(file, &target).map_err(|e| Error::FileTransfer {
                        action: "link",
                        from: file.clone(),
                        to: target.clone(),
                        source: e,
                    })?;
                }
                TransferMethod::Copy => {
                    std::fs::copy(file, &target).map_err(|e| Error::FileTransfer {
                        action: "copy",
                        from: file.clone(),
                        to: target.clone(),
                        source: e,
                    })?;
                }
            }
        }
        kept += 1;
    }

    if options.dry_run {
        info!("--dryrun used; no files transferred");
    }

    Ok(kept)
}
