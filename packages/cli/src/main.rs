#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the population movement dashboard.
//!
//! Loads the session snapshot once, then answers region flow queries,
//! prints legends, and exports display lists. Without a subcommand it
//! drops into an interactive session that drives the same selection
//! state the map UI would.

mod export;
mod interactive;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use move_map_dashboard::selection::Selection;
use move_map_dashboard::view::Dashboard;
use move_map_flow_models::Direction;
use move_map_geography_models::Region;
use move_map_snapshot::{DataPaths, LoadError, Snapshot};

#[derive(Parser)]
#[command(name = "move_map", about = "Population movement dashboard tools")]
struct Cli {
    /// Directory holding the four source documents
    #[arg(long, default_value = "./data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all loaded regions with their codes
    Regions,
    /// Show flow totals and the ranked display list for one region
    Query {
        /// Census code, or a case-insensitive display-name fragment
        region: String,
        /// Count flows into ("in") or out of ("out") the region
        #[arg(long, default_value = "in")]
        direction: Direction,
        /// Write the display list to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print the color legend for a direction
    Legend {
        /// Direction whose palette to show
        #[arg(long, default_value = "in")]
        direction: Direction,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        // The legend is static; it needs no data.
        Some(Commands::Legend { direction }) => render::print_legend(direction),
        Some(Commands::Regions) => {
            let snapshot = load_snapshot(&cli.data_dir).await?;
            for region in snapshot.catalog.regions() {
                if snapshot.translator.contains(&region.census_code) {
                    println!(
                        "{}  {}  (admin {})",
                        region.census_code,
                        region.display_name(),
                        region.admin_code
                    );
                } else {
                    println!("{}  {}", region.census_code, region.display_name());
                }
            }
        }
        Some(Commands::Query {
            region,
            direction,
            export,
        }) => {
            let snapshot = load_snapshot(&cli.data_dir).await?;
            query(&snapshot, &region, direction, export.as_deref())?;
        }
        None => {
            let snapshot = load_snapshot(&cli.data_dir).await?;
            interactive::run(&snapshot)?;
        }
    }

    Ok(())
}

/// Loads the session snapshot, logging the failure before bailing out.
/// A failed load is terminal: nothing runs on partial data.
async fn load_snapshot(data_dir: &Path) -> Result<Snapshot, LoadError> {
    let paths = DataPaths::from_dir(data_dir);
    Snapshot::load(&paths).await.inspect_err(|err| {
        log::error!("Failed to load session data: {err}");
    })
}

/// Runs one batch query and optionally exports its display list.
fn query(
    snapshot: &Snapshot,
    needle: &str,
    direction: Direction,
    export: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(region) = resolve_region(snapshot, needle) else {
        return Err(format!("No region matches {needle:?}").into());
    };

    let mut selection = Selection::new();
    selection.set_direction(direction);
    selection.select(&region.census_code);

    let dashboard = Dashboard::new(&snapshot.catalog, &snapshot.store);
    let view = dashboard.view(&selection);
    let Some(focus) = view.focus else {
        return Err("Selection produced no focus view".into());
    };

    render::print_focus(&focus);
    if let Some(path) = export {
        export::write_csv(&focus, path)?;
        println!("Exported {} rows to {}", focus.ranked.len(), path.display());
    }

    Ok(())
}

/// Finds a region by exact census code, falling back to the first
/// case-insensitive display-name match in boundary order.
fn resolve_region<'a>(snapshot: &'a Snapshot, needle: &str) -> Option<&'a Region> {
    if let Some(region) = snapshot.catalog.region_by_census(needle) {
        return Some(region);
    }

    let needle = needle.to_lowercase();
    snapshot
        .catalog
        .regions()
        .iter()
        .find(|region| region.display_name().to_lowercase().contains(&needle))
}
