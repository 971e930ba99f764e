//! Mapstamp - GPS track map overlays for timelapse images.
//!
//! This crate extracts GPS positions from geotagged images, renders a
//! per-image track map, and composites it onto copies of the images. It
//! also ships small companion utilities for organizing timelapse sets.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod metadata;
pub mod organize;
pub mod output;
pub mod pipeline;
pub mod render;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, OverlayArgs};
use config::{Config, config_file_path};
use organize::{DecimateOptions, RenameOptions, SubsetOptions};
use pipeline::{OverlayOptions, overlay_directory};
use render::{TrackStyle, parse_color};
use std::path::Path;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the mapstamp CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.overlay.verbose, cli.overlay.quiet);

    // Load and validate configuration before touching any image.
    let config = Config::load_default()?;
    config::validate_config(&config)?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let Some(src) = cli.src else {
        // No inputs and no subcommand: show usage.
        let mut cmd = <Cli as clap::CommandFactory>::command();
        let _ = cmd.print_help();
        return Ok(());
    };

    overlay_images(&src, &cli.overlay, &config)
}

/// Run the map overlay pipeline with CLI-over-config option resolution.
fn overlay_images(src: &Path, args: &OverlayArgs, config: &Config) -> Result<()> {
    use std::time::Instant;

    let start = Instant::now();
    let defaults = &config.overlay;

    let style = TrackStyle {
        line_width: args.map_line_width.unwrap_or(defaults.line_width),
        line_color: parse_color(args.map_line_color.as_deref().unwrap_or(&defaults.line_color))?,
        point_size: args.map_point_size.unwrap_or(defaults.point_size),
        point_color: parse_color(args.map_point_color.as_deref().unwrap_or(&defaults.point_color))?,
        breadcrumb_size: args.bc_point_size.unwrap_or(defaults.breadcrumb_size),
        breadcrumb_color: parse_color(
            args.bc_point_color.as_deref().unwrap_or(&defaults.breadcrumb_color),
        )?,
        background_alpha: args.map_alpha.unwrap_or(defaults.alpha),
    };

    let options = OverlayOptions {
        map_size: args.map_size.unwrap_or(defaults.map_size),
        map_dpi: args.map_dpi.unwrap_or(defaults.map_dpi),
        map_x: args.map_x.unwrap_or(defaults.map_x),
        map_y: args.map_y.unwrap_or(defaults.map_y),
        style,
        breadcrumbs: args.breadcrumbs,
        keep_map: args.keep_map,
        dry_run: args.dryrun,
        progress_enabled: !args.quiet && !args.no_progress,
    };

    if options.dry_run {
        info!("Dry run: final images will not be written");
    }

    let result = overlay_directory(src, &options)?;

    let duration = start.elapsed().as_secs_f64();
    info!(
        "Complete: {} composited, {} skipped in {:.2}s",
        result.rendered, result.skipped, duration
    );
    if result.skipped > 0 {
        warn!("{} image(s) had no usable GPS metadata", result.skipped);
    }

    Ok(())
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config),
        Command::Rename {
            src,
            ext,
            dst,
            renumber,
            r#move,
            dryrun,
        } => {
            let options = RenameOptions {
                dst,
                extension: ext,
                move_files: r#move,
                renumber,
                dry_run: dryrun,
            };
            let count = organize::rename_images(&src, &options)?;
            info!("Renamed {count} file(s)");
            Ok(())
        }
        Command::Subset {
            src,
            dst,
            start_hour,
            end_hour,
            ext,
            renumber,
            dryrun,
        } => {
            let options = SubsetOptions {
                start_hour,
                end_hour,
                extension: ext,
                renumber,
                dry_run: dryrun,
            };
            let count = organize::subset_by_hour(&src, &dst, &options)?;
            info!("Subset: {count} file(s) between hours {start_hour} and {end_hour}");
            Ok(())
        }
        Command::Decimate {
            src,
            dst,
            keep_factor,
            file_ext,
            transfer,
            dryrun,
        } => {
            let options = DecimateOptions {
                keep_factor,
                extension: file_ext,
                transfer,
                dry_run: dryrun,
            };
            let kept = organize::decimate(&src, &dst, &options)?;
            info!("Decimated: kept {kept} file(s) (every {keep_factor})");
            Ok(())
        }
    }
}

fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = Config::default().write_default()?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
