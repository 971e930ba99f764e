//! Map raster rendering and image compositing.

mod compose;
mod style;
mod track;

pub use compose::{flatten_onto_white, overlay_map};
pub use style::{TrackStyle, parse_color};
pub use track::render_track;
