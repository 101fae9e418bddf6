use anyhow::Result;
use clap::Parser;
use estate_cli::{seed, EstateLayout};
use estate_sdk::EstateClient;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Create and plant an estate on a running server", long_about = None)]
struct Args {
    /// Estate Server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Estate layout JSON file (defaults to the 6x3 sample estate)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Budget for the bounded drone plan query
    #[arg(long)]
    max_distance: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let layout = EstateLayout::load_or_sample(args.layout.as_deref())?;
    let client = EstateClient::new(args.url);

    let estate_id = client.create_estate(layout.plot()).await?;
    println!("Created estate {}", estate_id);

    let report = seed::plant_all(&layout.trees, |tree| client.plant_tree(&estate_id, tree)).await;
    report.ensure_complete()?;

    let stats = client.tree_stats(&estate_id).await?;
    println!(
        "Stats: count {}, min {}, max {}, median {}",
        stats.count, stats.min, stats.max, stats.median
    );

    let plan = client.drone_plan(&estate_id, None).await?;
    println!("Drone plan: {}m", plan.distance);

    if let Some(max_distance) = args.max_distance {
        let plan = client.drone_plan(&estate_id, Some(max_distance)).await?;
        match plan.rest_point {
            Some(rest) => println!("Budget {}m reached at ({}, {})", max_distance, rest.x, rest.y),
            None => println!("Budget {}m not reached: {}m", max_distance, plan.distance),
        }
    }

    Ok(())
}
