//! CLI argument definitions.

use crate::cli::validators::{
    parse_alpha, parse_color_spec, parse_fraction, parse_map_size, parse_positive_size,
};
use crate::organize::TransferMethod;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Overlay GPS track maps onto geotagged timelapse images.
#[derive(Debug, Parser)]
#[command(name = "mapstamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing geotagged images.
    pub src: Option<PathBuf>,

    /// Map overlay options.
    #[command(flatten)]
    pub overlay: OverlayArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Scrub timelapse-cam characters from filenames, or renumber.
    Rename {
        /// Directory of input images; files are overwritten in place
        /// unless an output directory is given.
        src: PathBuf,
        /// File extension to match (upper/lowercase tried on miss).
        #[arg(short, long, default_value = "jpg")]
        ext: String,
        /// Output directory.
        #[arg(short = 'o', long)]
        dst: Option<PathBuf>,
        /// Rename files to sequential numbers by alphanumeric order.
        #[arg(long)]
        renumber: bool,
        /// Move files instead of making a copy.
        #[arg(short, long)]
        r#move: bool,
        /// Run without altering any files.
        #[arg(long)]
        dryrun: bool,
    },
    /// Copy images captured between two hours of day into a new directory.
    Subset {
        /// Directory of input images.
        src: PathBuf,
        /// Output directory for matching images.
        dst: PathBuf,
        /// Start hour (0-23, inclusive).
        #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
        start_hour: u32,
        /// End hour (0-23, inclusive).
        #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
        end_hour: u32,
        /// File extension to match.
        #[arg(long, default_value = "jpg")]
        ext: String,
        /// Renumber the copied files sequentially.
        #[arg(long)]
        renumber: bool,
        /// Run without altering any files.
        #[arg(long)]
        dryrun: bool,
    },
    /// Keep every n-th image of a sequence (sorted by name).
    Decimate {
        /// Directory containing input files.
        src: PathBuf,
        /// Directory where kept files are written.
        dst: PathBuf,
        /// Frequency of images to keep (e.g. 4 keeps every fourth image).
        #[arg(short, long, default_value_t = crate::constants::decimate::DEFAULT_KEEP_FACTOR, value_parser = clap::value_parser!(usize))]
        keep_factor: usize,
        /// File extension to match.
        #[arg(short = 'f', long, default_value = "jpg")]
        file_ext: String,
        /// How kept files are transferred.
        #[arg(short, long, value_enum, default_value_t = TransferMethod::Link)]
        transfer: TransferMethod,
        /// Run without altering any files.
        #[arg(long)]
        dryrun: bool,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the overlay command.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct OverlayArgs {
    /// Insert gray dots for previously visited locations.
    #[arg(long)]
    pub breadcrumbs: bool,

    /// Keep the intermediate transparent map rasters.
    #[arg(long)]
    pub keep_map: bool,

    /// Run without writing final images (intermediates are cleaned up).
    #[arg(long)]
    pub dryrun: bool,

    /// Percent of image space the map occupies (range (0, 100]).
    #[arg(long, value_parser = parse_map_size, env = "MAPSTAMP_MAP_SIZE")]
    pub map_size: Option<u32>,

    /// DPI of the map raster.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), env = "MAPSTAMP_MAP_DPI")]
    pub map_dpi: Option<u32>,

    /// X location of the map relative to the image (range [0.0, 1.0]).
    #[arg(long, value_parser = parse_fraction)]
    pub map_x: Option<f64>,

    /// Y location of the map relative to the image (range [0.0, 1.0]).
    #[arg(long, value_parser = parse_fraction)]
    pub map_y: Option<f64>,

    /// Width of the track line in pixels.
    #[arg(long, value_parser = parse_positive_size)]
    pub map_line_width: Option<f32>,

    /// Color of the track line.
    #[arg(long, value_parser = parse_color_spec)]
    pub map_line_color: Option<String>,

    /// Transparency of the map background (range [0.0, 1.0]).
    #[arg(long, value_parser = parse_alpha)]
    pub map_alpha: Option<f32>,

    /// Size of the current-location point, in points.
    #[arg(long, value_parser = parse_positive_size)]
    pub map_point_size: Option<f32>,

    /// Color of the current-location point.
    #[arg(long, value_parser = parse_color_spec)]
    pub map_point_color: Option<String>,

    /// Size of breadcrumb points, in points.
    #[arg(long, value_parser = parse_positive_size)]
    pub bc_point_size: Option<f32>,

    /// Color of breadcrumb points.
    #[arg(long, value_parser = parse_color_spec)]
    pub bc_point_color: Option<String>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable progress bars without changing log verbosity.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
