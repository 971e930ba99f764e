//! Config file location and persistence.

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Configuration directory for the current platform.
///
/// - Linux: `~/.config/mapstamp/`
/// - macOS: `~/Library/Application Support/mapstamp/`
/// - Windows: `%APPDATA%\mapstamp\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Full path of the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

impl Config {
    /// Load the configuration the CLI starts from.
    ///
    /// Built-in defaults when no config file exists (or the platform has no
    /// config directory); a malformed file is an error, never silently
    /// replaced by defaults.
    pub fn load_default() -> Result<Self> {
        config_file_path().map_or_else(|_| Ok(Self::default()), |path| Self::load_from(&path))
    }

    /// Load configuration from a specific TOML file, defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write this configuration to the default platform path.
    ///
    /// Returns the path written, for user-facing messages.
    pub fn write_default(&self) -> Result<PathBuf> {
        let path = config_file_path()?;
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write this configuration as TOML, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| Error::ConfigSerialize { source: e })?;

        std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
