//! Transparent track-map rasterization.

use crate::constants::map::POINTS_PER_INCH;
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::render::TrackStyle;
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Fraction of each canvas dimension left as margin around the track.
const MARGIN_FRACTION: f32 = 0.05;

/// Bounding box of the track in decimal degrees.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Bounds {
    fn of(track: &[Coordinate]) -> Self {
        let mut bounds = Self {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        };
        for point in track {
            bounds.min_lat = bounds.min_lat.min(point.latitude);
            bounds.max_lat = bounds.max_lat.max(point.latitude);
            bounds.min_lon = bounds.min_lon.min(point.longitude);
            bounds.max_lon = bounds.max_lon.max(point.longitude);
        }
        // Degenerate tracks (single point or straight line along one axis)
        // still need a non-zero extent to project into.
        if bounds.max_lat - bounds.min_lat < f64::EPSILON {
            bounds.min_lat -= 1e-6;
            bounds.max_lat += 1e-6;
        }
        if bounds.max_lon - bounds.min_lon < f64::EPSILON {
            bounds.min_lon -= 1e-6;
            bounds.max_lon += 1e-6;
        }
        bounds
    }

    /// Project a coordinate into pixel space, y axis flipped so north is up.
    #[allow(clippy::cast_possible_truncation)]
    fn project(&self, point: Coordinate, width: f32, height: f32) -> (f32, f32) {
        let margin_x = width * MARGIN_FRACTION;
        let margin_y = height * MARGIN_FRACTION;
        let span_x = width - 2.0 * margin_x;
        let span_y = height - 2.0 * margin_y;

        let fx = (point.longitude - self.min_lon) / (self.max_lon - self.min_lon);
        let fy = (point.latitude - self.min_lat) / (self.max_lat - self.min_lat);

        let x = margin_x + fx as f32 * span_x;
        let y = height - (margin_y + fy as f32 * span_y);
        (x, y)
    }
}

/// Render the track map as a transparent RGBA raster.
///
/// The full track is drawn as a line, the current position as a
/// distinguished marker on top, and (when given) prior positions as smaller
/// muted markers layered beneath the current marker. The raster background
/// is white at the style's alpha over a fully transparent canvas.
pub fn render_track(
    track: &[Coordinate],
    current: Coordinate,
    breadcrumbs: Option<&[Coordinate]>,
    width_px: u32,
    height_px: u32,
    dpi: f32,
    style: &TrackStyle,
) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(width_px, height_px).ok_or_else(|| Error::Render {
        reason: format!("cannot allocate a {width_px}x{height_px} pixmap"),
    })?;

    let background =
        tiny_skia::Color::from_rgba(1.0, 1.0, 1.0, style.background_alpha.clamp(0.0, 1.0))
            .ok_or_else(|| Error::Render {
                reason: "invalid background color".to_string(),
            })?;
    pixmap.fill(background);

    let bounds = Bounds::of(track);

    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (width_px as f32, height_px as f32);

    draw_track_line(&mut pixmap, track, bounds, width, height, style)?;

    // Marker sizes are diameters in points, scaled to pixels by the DPI.
    let point_radius = style.point_size * dpi / POINTS_PER_INCH / 2.0;
    let breadcrumb_radius = style.breadcrumb_size * dpi / POINTS_PER_INCH / 2.0;

    if let Some(previous) = breadcrumbs {
        for crumb in previous {
            let (x, y) = bounds.project(*crumb, width, height);
            fill_circle(&mut pixmap, x, y, breadcrumb_radius, style.breadcrumb_color)?;
        }
    }

    let (cx, cy) = bounds.project(current, width, height);
    fill_circle(&mut pixmap, cx, cy, point_radius, style.point_color)?;

    Ok(pixmap_to_rgba(&pixmap))
}

fn draw_track_line(
    pixmap: &mut Pixmap,
    track: &[Coordinate],
    bounds: Bounds,
    width: f32,
    height: f32,
    style: &TrackStyle,
) -> Result<()> {
    if track.len() < 2 {
        return Ok(());
    }

    let mut builder = PathBuilder::new();
    let (x0, y0) = bounds.project(track[0], width, height);
    builder.move_to(x0, y0);
    for point in &track[1..] {
        let (x, y) = bounds.project(*point, width, height);
        builder.line_to(x, y);
    }
    let path = builder.finish().ok_or_else(|| Error::Render {
        reason: "track polyline produced an empty path".to_string(),
    })?;

    let mut paint = Paint::default();
    paint.set_color(style.line_color);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: style.line_width,
        ..Stroke::default()
    };

    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    Ok(())
}

fn fill_circle(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    radius: f32,
    color: tiny_skia::Color,
) -> Result<()> {
    let path = PathBuilder::from_circle(x, y, radius.max(0.5)).ok_or_else(|| Error::Render {
        reason: "marker circle produced an empty path".to_string(),
    })?;

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;

    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    Ok(())
}

/// Convert a premultiplied-alpha pixmap to a straight-alpha RGBA image.
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for pixel in pixmap.pixels() {
        let a = pixel.alpha();
        if a == 0 {
            pixels.extend_from_slice(&[0, 0, 0, 0]);
        } else {
            // Unpremultiply: color = premultiplied_color * 255 / alpha
            #[allow(clippy::cast_possible_truncation)]
            let unmul = |c: u8| (u16::from(c) * 255 / u16::from(a)) as u8;
            pixels.extend_from_slice(&[unmul(pixel.red()), unmul(pixel.green()), unmul(pixel.blue()), a]);
        }
    }

    RgbaImage::from_raw(width, height, pixels).unwrap_or_else(|| RgbaImage::new(width, height))
}
