//! Error types for mapstamp.

/// Result type alias for mapstamp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for mapstamp.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Input path is not a directory.
    #[error("input path is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: std::path::PathBuf,
    },

    /// No matching image files found.
    #[error("no image files matching '*.{extension}' found in '{path}'")]
    NoImagesFound {
        /// Directory that was searched.
        path: std::path::PathBuf,
        /// Extension that was matched against.
        extension: String,
    },

    /// Every matchable image lacked usable GPS metadata.
    #[error("none of the images in '{path}' carry GPS metadata")]
    NoGeotaggedImages {
        /// Directory that was processed.
        path: std::path::PathBuf,
    },

    /// No files matched the requested time-of-day range.
    #[error("no images in '{path}' captured between hours {start} and {end}")]
    NoImagesInTimeRange {
        /// Directory that was searched.
        path: std::path::PathBuf,
        /// Start hour (inclusive).
        start: u32,
        /// End hour (inclusive).
        end: u32,
    },

    /// Failed to read EXIF metadata from an image.
    #[error("failed to read EXIF metadata from '{path}'")]
    ExifRead {
        /// Path to the image.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: exif::Error,
    },

    /// Image carries no GPS block at all.
    #[error("image is not geotagged: {path}")]
    NotGeotagged {
        /// Path to the image.
        path: std::path::PathBuf,
    },

    /// Image has a GPS block but a required field is absent.
    #[error("missing GPS field '{field}' in '{path}'")]
    GpsFieldMissing {
        /// Path to the image.
        path: std::path::PathBuf,
        /// Name of the missing EXIF field.
        field: &'static str,
    },

    /// GPS field has an unexpected value type or shape.
    #[error("malformed GPS field '{field}' in '{path}'")]
    GpsFieldMalformed {
        /// Path to the image.
        path: std::path::PathBuf,
        /// Name of the malformed EXIF field.
        field: &'static str,
    },

    /// Image carries no usable capture timestamp.
    #[error("no capture timestamp found in '{path}'")]
    TimestampMissing {
        /// Path to the image.
        path: std::path::PathBuf,
    },

    /// Capture timestamp could not be parsed.
    #[error("could not parse capture timestamp '{value}' from '{path}'")]
    TimestampParse {
        /// Path to the image.
        path: std::path::PathBuf,
        /// The raw timestamp string.
        value: String,
    },

    /// Image width precondition violated (caller bug, not a data issue).
    #[error("image width must be greater than 0; value supplied: {value}")]
    InvalidImageWidth {
        /// The offending value.
        value: f64,
    },

    /// Image height precondition violated.
    #[error("image height must be greater than 0; value supplied: {value}")]
    InvalidImageHeight {
        /// The offending value.
        value: f64,
    },

    /// Map size precondition violated.
    #[error("map size must be greater than 0; value supplied: {value}")]
    InvalidMapSize {
        /// The offending value.
        value: f64,
    },

    /// Map DPI precondition violated.
    #[error("map DPI must be greater than 0; value supplied: {value}")]
    InvalidMapDpi {
        /// The offending value.
        value: f64,
    },

    /// Unrecognized color specification.
    #[error("unrecognized color '{value}' (expected a named color or #rrggbb)")]
    InvalidColor {
        /// The raw color string.
        value: String,
    },

    /// Failed to open or decode an image file.
    #[error("failed to open image '{path}'")]
    ImageOpen {
        /// Path to the image.
        path: std::path::PathBuf,
        /// Underlying decode error.
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to write image '{path}'")]
    ImageWrite {
        /// Path to the image.
        path: std::path::PathBuf,
        /// Underlying encode error.
        #[source]
        source: image::ImageError,
    },

    /// Map raster allocation or drawing failed.
    #[error("failed to render map raster: {reason}")]
    Render {
        /// Description of the render failure.
        reason: String,
    },

    /// Failed to create an output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to transfer (copy/link/move) a file.
    #[error("failed to {action} '{from}' to '{to}'")]
    FileTransfer {
        /// The transfer action that failed.
        action: &'static str,
        /// Source path.
        from: std::path::PathBuf,
        /// Destination path.
        to: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error is a recoverable per-image metadata failure.
    ///
    /// The overlay pipeline logs these as warnings and skips the image;
    /// everything else aborts the operation.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::NotGeotagged { .. }
                | Self::GpsFieldMissing { .. }
                | Self::GpsFieldMalformed { .. }
                | Self::ExifRead { .. }
        )
    }
}
