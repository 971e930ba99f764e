//! CLI argument parsing.

mod args;
mod validators;

pub use args::{Cli, Command, ConfigAction, OverlayArgs};
pub use validators::{parse_alpha, parse_color_spec, parse_fraction, parse_map_size, parse_positive_size};
