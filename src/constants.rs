//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "mapstamp";

/// Default map option values, tuned for GoPro timelapse output.
pub mod map {
    /// Percent of the image's linear dimensions the map occupies.
    pub const DEFAULT_SIZE_PERCENT: u32 = 20;

    /// Map raster density in dots per inch.
    pub const DEFAULT_DPI: u32 = 50;

    /// Horizontal placement fraction (1.0 = right edge).
    pub const DEFAULT_X: f64 = 1.0;

    /// Vertical placement fraction (1.0 = bottom edge).
    pub const DEFAULT_Y: f64 = 1.0;

    /// Track line width in pixels.
    pub const DEFAULT_LINE_WIDTH: f32 = 3.0;

    /// Track line color.
    pub const DEFAULT_LINE_COLOR: &str = "blue";

    /// Map background alpha.
    pub const DEFAULT_ALPHA: f32 = 0.25;

    /// Current-position marker size in points.
    pub const DEFAULT_POINT_SIZE: f32 = 25.0;

    /// Current-position marker color.
    pub const DEFAULT_POINT_COLOR: &str = "red";

    /// Breadcrumb marker size in points.
    pub const DEFAULT_BREADCRUMB_SIZE: f32 = 10.0;

    /// Breadcrumb marker color.
    pub const DEFAULT_BREADCRUMB_COLOR: &str = "gray";

    /// Empirical divisor for placement offsets.
    ///
    /// Compensates for the compositor anchoring pastes at the image
    /// top-left. Known limitation: placement is only visually correct in
    /// the lower-right quadrant.
    pub const PLACEMENT_DIVISOR: f64 = 1.6;

    /// Points per inch, for marker size conversion.
    pub const POINTS_PER_INCH: f32 = 72.0;
}

/// Output filename suffixes for the overlay pipeline.
pub mod suffixes {
    /// Suffix of the intermediate transparent map raster.
    pub const TRANSPARENT: &str = "_transparent.png";

    /// Suffix of the final composited image.
    pub const MAP: &str = "_map.JPG";
}

/// Image file handling.
pub mod images {
    /// Default extension matched when scanning input directories.
    pub const DEFAULT_EXTENSION: &str = "jpg";

    /// Extensions recognized as overlay input.
    pub const OVERLAY_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
}

/// Frame decimation defaults.
pub mod decimate {
    /// Keep every n-th frame by default.
    pub const DEFAULT_KEEP_FACTOR: usize = 2;
}

/// Decimal-minutes conversion constants.
pub mod gps {
    /// Minimum implied decimal exponent for the decimal-minutes scale.
    ///
    /// The padding scheme always carries at least one zero between the
    /// decimal point and the leading digit, so values with fewer than
    /// three digits still scale by 10^-3. Fragile but required for
    /// compatibility with existing coordinate vectors.
    pub const MIN_SCALE_DIGITS: u32 = 3;

    /// Minutes per degree.
    pub const MINUTES_PER_DEGREE: f64 = 60.0;
}
