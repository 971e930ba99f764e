//! Map canvas sizing and placement math.

use crate::constants::map::PLACEMENT_DIVISOR;
use crate::error::{Error, Result};

/// Compute the map canvas dimensions in plot units.
///
/// Each image dimension is scaled by `map_size_percent / 100` and divided
/// by `map_dpi`; multiplying the result back by the DPI yields the raster
/// size in pixels. All four inputs must be strictly positive and each is
/// validated with its own error variant so a caller bug names the exact
/// offending parameter.
pub fn canvas_dimensions(
    image_width: f64,
    image_height: f64,
    map_size_percent: f64,
    map_dpi: f64,
) -> Result<(f64, f64)> {
    if image_width <= 0.0 {
        return Err(Error::InvalidImageWidth { value: image_width });
    }
    if image_height <= 0.0 {
        return Err(Error::InvalidImageHeight {
            value: image_height,
        });
    }
    if map_size_percent <= 0.0 {
        return Err(Error::InvalidMapSize {
            value: map_size_percent,
        });
    }
    if map_dpi <= 0.0 {
        return Err(Error::InvalidMapDpi { value: map_dpi });
    }

    let width_scaled = image_width * (map_size_percent * 0.01);
    let height_scaled = image_height * (map_size_percent * 0.01);

    Ok((width_scaled / map_dpi, height_scaled / map_dpi))
}

/// Compute the pixel offset at which the map is pasted onto the image.
///
/// `map_fraction` is the placement fraction along one axis (0.0 = edge
/// nearest the origin, 1.0 = far edge) and `image_dimension` the matching
/// image dimension in pixels. The divisor offsets from the far edge because
/// the compositor anchors pastes at the top-left; it is only visually
/// correct for lower-right placement (known limitation, see the constant).
#[allow(clippy::cast_possible_truncation)]
pub fn placement_offset(map_fraction: f64, image_dimension: f64) -> i64 {
    ((map_fraction * image_dimension) / PLACEMENT_DIVISOR).round() as i64
}
