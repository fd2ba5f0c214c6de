//! Vastu-Layout command line tool.
//!
//! Loads a layout scenario and reports its route, overlaps and (optionally)
//! whether one block's current placement is valid.
//!
//! # Usage
//!
//! ```bash
//! # Route between the scenario's start and end
//! cargo run --release -- scenarios/aisles.yaml
//!
//! # Also list overlapping blocks and validate one of them
//! cargo run --release -- scenarios/aisles.yaml --overlaps --validate shelf-2
//!
//! # With custom config file
//! cargo run --release -- scenarios/aisles.yaml --config my-config.yaml
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use vastu_layout::{CollisionChecker, LayoutConfig, LayoutScenario, PathFailure};

/// Route and placement report for a floor layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layout scenario file (YAML)
    layout: PathBuf,

    /// Configuration file path (defaults to configs/config.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report every block involved in an overlap
    #[arg(long)]
    overlaps: bool,

    /// Validate the current placement of the block with this id
    #[arg(long, value_name = "ID")]
    validate: Option<String>,
}

fn load_config(args: &Args) -> Option<LayoutConfig> {
    let loaded = match &args.config {
        Some(path) => LayoutConfig::load(path),
        None => LayoutConfig::load_default(),
    };

    match loaded {
        Ok(config) => Some(config),
        Err(e) => {
            error!("Failed to load config: {}", e);
            None
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    let Some(config) = load_config(&args) else {
        return ExitCode::FAILURE;
    };

    let scenario = match LayoutScenario::load(&args.layout) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Layout '{}': {} blocks",
        scenario.name,
        scenario.obstacles.len()
    );
    if !scenario.description.is_empty() {
        info!("  {}", scenario.description);
    }

    // Route
    let astar = config.to_astar_config();
    info!(
        "  Grid: {:.2}m cells, {:.2}m clearance",
        astar.resolution, astar.clearance
    );
    let result = scenario.path_query().run(astar);
    if result.success {
        println!("{}", result.message);
        for (i, wp) in result.waypoints.iter().enumerate() {
            println!("  {:>3}: ({:.2}, {:.2})", i, wp.x, wp.y);
        }
        info!(
            "  {} cells, {} nodes expanded",
            result.length_cells(),
            result.nodes_expanded
        );
    } else if result.failure_reason == Some(PathFailure::MissingEndpoints) {
        println!("No route requested ({})", result.message);
    } else {
        println!("Route failed: {}", result.message);
    }

    let checker = CollisionChecker::new(config.to_collision_config());

    if args.overlaps {
        let mut ids: Vec<String> = checker
            .find_overlapping(&scenario.obstacles)
            .into_iter()
            .collect();
        ids.sort();
        if ids.is_empty() {
            println!("No overlapping blocks");
        } else {
            println!("Overlapping blocks: {}", ids.join(", "));
        }
    }

    if let Some(id) = &args.validate {
        let Some(target) = scenario.obstacle(id) else {
            error!("No block with id '{}' in {}", id, args.layout.display());
            return ExitCode::FAILURE;
        };
        let validation =
            checker.validate_placement(target, &scenario.obstacles, Some(id.as_str()));
        match validation.message() {
            None => println!("Placement of '{}' is valid", id),
            Some(reason) => println!("Placement of '{}' is invalid: {}", id, reason),
        }
    }

    ExitCode::SUCCESS
}
