//! Interactive dashboard session.
//!
//! Menu-driven loop over the same selection state the map UI would
//! own: picking the focused region again deselects it, switching
//! direction keeps the selection, and export writes exactly the list
//! last shown.

use std::path::PathBuf;

use dialoguer::{Input, Select};
use move_map_dashboard::selection::{Selection, Transition};
use move_map_dashboard::view::Dashboard;
use move_map_snapshot::Snapshot;

use crate::{export, render};

/// Runs the interactive session loop.
///
/// # Errors
///
/// Returns an error if a terminal prompt or an export write fails.
pub fn run(snapshot: &Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::new(&snapshot.catalog, &snapshot.store);
    let mut selection = Selection::new();

    println!("Population Movement Dashboard");

    loop {
        println!();
        let status = selection.selected().map_or_else(
            || "nothing selected".to_string(),
            |census_code| snapshot.catalog.region_by_census(census_code).map_or_else(
                || census_code.to_string(),
                move_map_geography_models::Region::display_name,
            ),
        );

        let items = [
            "Select a region".to_string(),
            format!("Switch direction (now: {})", selection.direction().label()),
            "Export display list".to_string(),
            "Show legend".to_string(),
            "Quit".to_string(),
        ];

        let choice = Select::new()
            .with_prompt(format!(
                "{} / {}",
                status,
                selection.direction().label()
            ))
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => select_region(snapshot, &dashboard, &mut selection)?,
            1 => {
                selection.toggle_direction();
                show_view(&dashboard, &selection);
            }
            2 => export_view(&dashboard, &selection)?,
            3 => render::print_legend(selection.direction()),
            _ => return Ok(()),
        }
    }
}

/// Prompts for a region and applies the click semantics: re-picking
/// the focused region deselects it.
fn select_region(
    snapshot: &Snapshot,
    dashboard: &Dashboard<'_>,
    selection: &mut Selection,
) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = snapshot
        .catalog
        .regions()
        .iter()
        .map(move_map_geography_models::Region::display_name)
        .collect();

    let index = Select::new()
        .with_prompt("Region")
        .items(&names)
        .default(0)
        .interact()?;

    let census_code = snapshot.catalog.regions()[index].census_code.clone();
    match selection.select(&census_code) {
        Transition::Deselected => println!("Deselected {}", names[index]),
        Transition::Selected | Transition::Replaced => {}
    }

    show_view(dashboard, selection);
    Ok(())
}

/// Recomputes and prints the view for the current state.
fn show_view(dashboard: &Dashboard<'_>, selection: &Selection) {
    let view = dashboard.view(selection);
    match view.focus {
        Some(focus) => render::print_focus(&focus),
        None => println!("No region selected."),
    }
}

/// Exports the current display list, if there is one.
fn export_view(
    dashboard: &Dashboard<'_>,
    selection: &Selection,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = dashboard.view(selection);
    let Some(focus) = view.focus else {
        println!("Select a region before exporting.");
        return Ok(());
    };

    let path: String = Input::new()
        .with_prompt("Export file")
        .default("display_list.csv".to_string())
        .interact_text()?;
    let path = PathBuf::from(path);

    export::write_csv(&focus, &path)?;
    println!("Exported {} rows to {}", focus.ranked.len(), path.display());
    Ok(())
}
