//! Overlay processing pipeline.

mod coordinator;
mod processor;

pub use coordinator::{
    TrackEntry, TrackRecord, collect_image_files, map_output_path, transparent_output_path,
};
pub use processor::{OverlayOptions, OverlayResult, overlay_directory};
