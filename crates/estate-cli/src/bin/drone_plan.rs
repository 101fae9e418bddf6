use anyhow::Result;
use clap::Parser;
use estate_cli::EstateLayout;
use estate_core::{compute_stats, plan_flight};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan a drone flight over an estate layout", long_about = None)]
struct Args {
    /// Estate layout JSON file (defaults to the 6x3 sample estate)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Stop once this distance is reached (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_distance: u64,

    /// Also print tree height statistics
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let layout = EstateLayout::load_or_sample(args.layout.as_deref())?;

    println!(
        "Estate {}x{} with {} trees",
        layout.length,
        layout.width,
        layout.trees.len()
    );

    let result = plan_flight(&layout.plot(), &layout.trees, Some(args.max_distance))?;
    match result.rest_point {
        Some(rest) => println!(
            "Budget of {}m reached at ({}, {})",
            result.distance, rest.x, rest.y
        ),
        None => println!("Total flying distance: {}m", result.distance),
    }

    if args.stats {
        let stats = compute_stats(&layout.trees);
        println!(
            "Trees: count {}, min {}, max {}, median {}",
            stats.count, stats.min, stats.max, stats.median
        );
    }

    Ok(())
}
