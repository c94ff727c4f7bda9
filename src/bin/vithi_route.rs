//! Route demo CLI.
//!
//! Loads a store layout, composes a route through the requested zones,
//! and prints the spoken directions (and optionally the grid with the
//! route overlaid).
//!
//! Usage:
//!   cargo run --bin vithi-route -- dairy produce
//!   cargo run --bin vithi-route -- --layout configs/store.yaml --map dairy

use std::path::Path;

use clap::Parser;
use log::warn;

use vithi_nav::{NavConfig, Navigator, StoreLayout};

/// Store route demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Store layout file path
    #[arg(short, long, default_value = "configs/store.yaml")]
    layout: String,

    /// Engine configuration file (defaults used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Print the grid as ASCII art with the route overlaid
    #[arg(long)]
    map: bool,

    /// Zone ids to visit, in order
    #[arg(required = true)]
    zones: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let layout = StoreLayout::load(Path::new(&args.layout))?;
    for (a, b) in layout.validate() {
        warn!("zones '{}' and '{}' overlap; later zone wins", a, b);
    }

    let config = match &args.config {
        Some(path) => NavConfig::load(Path::new(path))?,
        None => NavConfig::default(),
    };

    let navigator = Navigator::new(layout, config);
    let zone_ids: Vec<&str> = args.zones.iter().map(String::as_str).collect();
    let route = navigator.route(&zone_ids);

    for id in &route.skipped {
        eprintln!("skipped zone: {}", id);
    }

    for step in &route.steps {
        if let Some(text) = &step.instruction {
            println!("({:>2},{:>2})  {}", step.position.x, step.position.y, text);
        }
    }
    println!("{} steps total", route.steps.len());

    if args.map {
        println!("\n{}", navigator.grid().ascii_map(&route.steps));
    }

    Ok(())
}
