//! Configuration type definitions.

use crate::constants::map;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Map overlay defaults.
    #[serde(default)]
    pub overlay: OverlayConfig,
}

/// Default settings for the overlay command.
///
/// Every field can be overridden per run from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Percent of the image's linear dimensions the map occupies, (0, 100].
    pub map_size: u32,

    /// Map raster density in dots per inch.
    pub map_dpi: u32,

    /// Horizontal placement fraction in [0.0, 1.0].
    pub map_x: f64,

    /// Vertical placement fraction in [0.0, 1.0].
    pub map_y: f64,

    /// Track line width in pixels.
    pub line_width: f32,

    /// Track line color (name or #rrggbb).
    pub line_color: String,

    /// Map background alpha in [0.0, 1.0].
    pub alpha: f32,

    /// Current-position marker size in points.
    pub point_size: f32,

    /// Current-position marker color.
    pub point_color: String,

    /// Breadcrumb marker size in points.
    pub breadcrumb_size: f32,

    /// Breadcrumb marker color.
    pub breadcrumb_color: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            map_size: map::DEFAULT_SIZE_PERCENT,
            map_dpi: map::DEFAULT_DPI,
            map_x: map::DEFAULT_X,
            map_y: map::DEFAULT_Y,
            line_width: map::DEFAULT_LINE_WIDTH,
            line_color: map::DEFAULT_LINE_COLOR.to_string(),
            alpha: map::DEFAULT_ALPHA,
            point_size: map::DEFAULT_POINT_SIZE,
            point_color: map::DEFAULT_POINT_COLOR.to_string(),
            breadcrumb_size: map::DEFAULT_BREADCRUMB_SIZE,
            breadcrumb_color: map::DEFAULT_BREADCRUMB_COLOR.to_string(),
        }
    }
}
