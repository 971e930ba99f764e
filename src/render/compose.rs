//! Alpha compositing of the map raster onto the base image.

use image::{DynamicImage, Rgb, RgbImage, RgbaImage, imageops};

/// Paste the transparent map raster onto a copy of the base image.
///
/// The paste is anchored at the raster's top-left corner; the offset comes
/// from [`crate::geo::placement_offset`]. Pixels falling outside the base
/// image are clipped. The original image is never modified.
pub fn overlay_map(base: &DynamicImage, map: &RgbaImage, offset_x: i64, offset_y: i64) -> RgbaImage {
    let mut canvas = base.to_rgba8();
    imageops::overlay(&mut canvas, map, offset_x, offset_y);
    canvas
}

/// Flatten an RGBA image against a white background for opaque formats.
///
/// JPEG output has no alpha channel; each pixel is blended over white using
/// its alpha as the mask, then the channel is discarded.
pub fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        #[allow(clippy::cast_possible_truncation)]
        let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    out
}
