//! Application entry point for the dollar game viewer.
//!
//! This binary parses command-line options, sets up logging and
//! eframe/egui, and delegates all interactive logic and rendering to
//! [`Viewer`] from the `viewer` module.

mod viewer;

use clap::Parser;
use dollar_core::config::{Config, clamp_max_neighbors, clamp_node_count};
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(name = "dollar_game")]
#[command(about = "Play the dollar game on a randomly generated graph")]
struct Args {
    /// Number of nodes to place (clamped to 3..=50)
    #[arg(long, default_value_t = 5)]
    nodes: i64,

    /// Neighbor limit for extra edges (at least 2)
    #[arg(long, default_value_t = 5)]
    max_neighbors: i64,

    /// Seed for reproducible graphs; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let cfg = Config {
        node_count: clamp_node_count(Some(args.nodes)),
        max_neighbors: clamp_max_neighbors(Some(args.max_neighbors)),
        ..Config::default()
    };
    tracing::info!(?cfg, seed = ?args.seed, "starting viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Dollar Game",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg, args.seed)))),
    )
}
