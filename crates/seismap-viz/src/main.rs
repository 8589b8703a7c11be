//! seismap - interactive map view for seismic catalogues.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::Level;

use seismap_core::{Catalog, MapController, MapHost, MarkerSelection};
use seismap_viz::{sample_catalog, SeisMapApp};

/// Interactive map view for seismic stations and catalogue events.
#[derive(Parser, Debug)]
#[command(name = "seismap", author, version, about, long_about = None)]
struct Cli {
    /// Catalogue JSON file to plot (uses built-in sample data if omitted).
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Initial map center latitude.
    #[arg(long, default_value_t = -25.0, allow_hyphen_values = true)]
    lat: f64,

    /// Initial map center longitude.
    #[arg(long, default_value_t = 135.0, allow_hyphen_values = true)]
    lon: f64,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Stand-in host: logs every selection it is notified of. An embedding
/// application would highlight its catalogue table row here instead.
struct LoggingHost;

impl MapHost for LoggingHost {
    fn marker_selected(&mut self, selection: &MarkerSelection) {
        tracing::info!(
            event = %selection.event_id,
            group = %selection.group_tag,
            row_ref = %selection.row_ref,
            lat = selection.lat,
            lon = selection.lon,
            "marker selected"
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => sample_catalog(),
    };

    let mut controller = MapController::with_host(Box::new(LoggingHost));
    controller.load_catalog(&catalog);

    let (lat, lon) = (cli.lat, cli.lon);
    eframe::run_native(
        "seismap",
        eframe::NativeOptions::default(),
        Box::new(move |cc| Ok(Box::new(SeisMapApp::new(cc, controller, lat, lon)))),
    )
    .map_err(|e| anyhow!("failed to start ui: {e}"))
}
