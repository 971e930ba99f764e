//! Two-pass overlay processing.

use crate::error::{Error, Result};
use crate::geo::{canvas_dimensions, coordinates, placement_offset};
use crate::metadata::read_gps_block;
use crate::output::progress;
use crate::pipeline::{
    TrackRecord, collect_image_files, map_output_path, transparent_output_path,
};
use crate::render::{TrackStyle, flatten_onto_white, overlay_map, render_track};
use std::path::Path;
use tracing::{debug, info};

/// Options for one overlay run.
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Percent of the image's linear dimensions the map occupies.
    pub map_size: u32,
    /// Map raster density in dots per inch.
    pub map_dpi: u32,
    /// Horizontal placement fraction.
    pub map_x: f64,
    /// Vertical placement fraction.
    pub map_y: f64,
    /// Visual style of the rendered track.
    pub style: TrackStyle,
    /// Render markers for previously visited positions.
    pub breadcrumbs: bool,
    /// Keep the intermediate transparent rasters.
    pub keep_map: bool,
    /// Suppress the final composited output; intermediates are still
    /// rendered and then cleaned up.
    pub dry_run: bool,
    /// Show progress bars.
    pub progress_enabled: bool,
}

/// Outcome counters of an overlay run.
#[derive(Debug, Clone, Copy)]
pub struct OverlayResult {
    /// Images composited (or rendered, under dry-run).
    pub rendered: usize,
    /// Images skipped for missing GPS metadata.
    pub skipped: usize,
}

/// Run the full overlay pipeline over a directory of images.
///
/// Pass one extracts coordinates from every matchable image into the shared
/// track record; pass two renders and composites one map per surviving
/// image. Originals are never modified in place.
pub fn overlay_directory(src: &Path, options: &OverlayOptions) -> Result<OverlayResult> {
    let files = collect_image_files(src)?;
    info!("Found {} image(s) in {}", files.len(), src.display());

    // Pass 1: coordinate extraction.
    let extract_progress =
        progress::create_stage_progress(files.len(), "coords extracted from exif", options.progress_enabled);

    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let result = read_gps_block(&file).map(|block| coordinates(&block));
        results.push((file, result));
        progress::inc_progress(extract_progress.as_ref());
    }
    progress::finish_progress(extract_progress, "coordinates extracted");

    let record = TrackRecord::collect(results)?;
    if record.entries.is_empty() {
        return Err(Error::NoGeotaggedImages {
            path: src.to_path_buf(),
        });
    }

    // Map geometry is sized from the last image, assuming a timelapse has
    // uniform dimensions throughout.
    let last = &record.entries[record.entries.len() - 1];
    let (img_width, img_height) =
        image::image_dimensions(&last.path).map_err(|e| Error::ImageOpen {
            path: last.path.clone(),
            source: e,
        })?;

    let (canvas_w, canvas_h) = canvas_dimensions(
        f64::from(img_width),
        f64::from(img_height),
        f64::from(options.map_size),
        f64::from(options.map_dpi),
    )?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (raster_w, raster_h) = (
        (canvas_w * f64::from(options.map_dpi)).round().max(1.0) as u32,
        (canvas_h * f64::from(options.map_dpi)).round().max(1.0) as u32,
    );

    let offset_x = placement_offset(options.map_x, f64::from(img_width));
    let offset_y = placement_offset(options.map_y, f64::from(img_height));
    debug!(
        "Map raster {raster_w}x{raster_h} px at offset ({offset_x}, {offset_y}) on {img_width}x{img_height} images"
    );

    // Pass 2: render and composite.
    let track = record.coordinates();
    let render_progress = progress::create_stage_progress(
        record.entries.len(),
        "maps plotted",
        options.progress_enabled,
    );

    #[allow(clippy::cast_precision_loss)]
    let dpi = options.map_dpi as f32;
    let mut rendered = 0;

    for (index, entry) in record.entries.iter().enumerate() {
        let crumbs = if options.breadcrumbs {
            Some(&track[..index])
        } else {
            None
        };

        let raster = render_track(
            &track,
            entry.coordinate,
            crumbs,
            raster_w,
            raster_h,
            dpi,
            &options.style,
        )?;

        let transparent_path = transparent_output_path(&entry.path);
        raster.save(&transparent_path).map_err(|e| Error::ImageWrite {
            path: transparent_path.clone(),
            source: e,
        })?;

        let base = image::open(&entry.path).map_err(|e| Error::ImageOpen {
            path: entry.path.clone(),
            source: e,
        })?;
        let composited = overlay_map(&base, &raster, offset_x, offset_y);

        if !options.dry_run {
            let map_path = map_output_path(&entry.path);
            flatten_onto_white(&composited)
                .save(&map_path)
                .map_err(|e| Error::ImageWrite {
                    path: map_path.clone(),
                    source: e,
                })?;
        }

        if !options.keep_map {
            std::fs::remove_file(&transparent_path)?;
        }

        rendered += 1;
        progress::inc_progress(render_progress.as_ref());
    }

    progress::finish_progress(render_progress, "maps plotted");

    Ok(OverlayResult {
        rendered,
        skipped: record.skipped,
    })
}
