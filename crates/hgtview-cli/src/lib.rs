//! # hgtview-cli
//!
//! Command-line front end for hgtview. It plays the part of the map widget:
//! grids come in as decoder JSON, viewports and pointer positions come from
//! arguments, and frames and status lines go to stdout.
//!
//! ```text
//! hgtview synth --lat 49.5 --lon 10.5 --out tile.json
//! hgtview tile-name --lat 49.7 --lon -1.3
//! hgtview probe --grid tile.json --lat 49.5 --lon 10.5
//! hgtview raster --grid tile.json --viewport 49.2,10.2,49.8,10.8 --alpha
//! ```

mod error;
mod synth;

pub use error::CliError;
pub use synth::{synth_grid, SYNTH_BASIN_M, SYNTH_PEAK_M};

use clap::{Args, Parser, Subcommand};
use hgtview_grid::{tile_name, GeoBounds, GeoPoint, HeightGrid, SRTM3_SIZE};
use hgtview_render::{NoticeCallback, Viewer, ViewerSettings};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// SRTM elevation overlay tools.
#[derive(Debug, Parser)]
#[command(name = "hgtview", version, about)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the SRTM tile name for a coordinate.
    TileName(PointArgs),
    /// Print the status line and highlighted cell for a pointer position.
    Probe {
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        point: PointArgs,
    },
    /// Rasterize a grid for a viewport and print the frame as JSON.
    Raster {
        #[command(flatten)]
        grid: GridArgs,
        /// Visible area as south,west,north,east (default: whole world).
        #[arg(long, allow_hyphen_values = true)]
        viewport: Option<String>,
        /// Draw half-transparent cells (overrides settings).
        #[arg(long)]
        alpha: bool,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Write a synthetic grid JSON for the tile containing a coordinate.
    Synth {
        #[command(flatten)]
        point: PointArgs,
        /// Samples per side (1201 or 3601 for displayable grids).
        #[arg(long, default_value_t = SRTM3_SIZE)]
        size: usize,
        /// Output file.
        #[arg(long)]
        out: PathBuf,
    },
}

/// A coordinate on the command line.
#[derive(Debug, Clone, Copy, Args)]
pub struct PointArgs {
    /// Latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    /// Longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}

/// Grid and settings inputs.
#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Decoded grid as JSON.
    #[arg(long)]
    pub grid: PathBuf,
    /// Viewer settings YAML.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

/// Parse `south,west,north,east` into bounds.
pub fn parse_viewport(s: &str) -> Result<GeoBounds> {
    let invalid = || CliError::InvalidViewport(s.to_string());
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    match values[..] {
        [south, west, north, east] if south < north && west < east => Ok(GeoBounds::from_corners(
            GeoPoint::new(south, west),
            GeoPoint::new(north, east),
        )),
        _ => Err(invalid()),
    }
}

/// Read a decoder JSON grid from disk.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<HeightGrid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let grid: HeightGrid = serde_json::from_str(&text)?;
    debug!(path = %path.display(), size = grid.size(), "read grid");
    Ok(grid)
}

/// Write a grid as decoder JSON.
pub fn save_grid<P: AsRef<Path>>(grid: &HeightGrid, path: P) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    serde_json::to_writer(std::io::BufWriter::new(file), grid)?;
    Ok(())
}

fn build_viewer(args: &GridArgs, notifier: Option<NoticeCallback>) -> Result<Viewer> {
    let settings = match &args.settings {
        Some(path) => ViewerSettings::from_file(path)?,
        None => ViewerSettings::default(),
    };
    let mut viewer = Viewer::with_settings(&settings)?;
    if let Some(cb) = notifier {
        viewer.set_notifier(cb);
    }
    viewer.load_grid(load_grid(&args.grid)?);
    Ok(viewer)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Run a command and return what it prints to stdout.
///
/// Notices raised while loading the grid are passed to `notifier`.
pub fn run(command: &Command, notifier: Option<NoticeCallback>) -> Result<String> {
    match command {
        Command::TileName(point) => Ok(tile_name(point.lat, point.lon)),

        Command::Probe { grid, point } => {
            let viewer = build_viewer(grid, notifier)?;
            let readout = viewer.pointer_moved(point.lat, point.lon);
            let highlight = readout.highlight;
            Ok(format!(
                "{}\nhighlight: [{:.6}, {:.6}] - [{:.6}, {:.6}]",
                readout.status, highlight.min_lat, highlight.min_lon, highlight.max_lat, highlight.max_lon
            ))
        }

        Command::Raster {
            grid,
            viewport,
            alpha,
            pretty,
        } => {
            let mut viewer = build_viewer(grid, notifier)?;
            if *alpha {
                viewer.set_alpha(true);
            }
            let viewport = match viewport {
                Some(v) => parse_viewport(v)?,
                None => GeoBounds::unbounded(),
            };
            let frame = viewer.render(&viewport);
            info!(cells = frame.cells.len(), "rendered frame");
            to_json(&frame, *pretty)
        }

        Command::Synth { point, size, out } => {
            let grid = synth_grid(point.lat, point.lon, *size)?;
            save_grid(&grid, out)?;
            info!(path = %out.display(), size, "wrote synthetic grid");
            Ok(format!("{} -> {}", tile_name(point.lat, point.lon), out.display()))
        }
    }
}
