//! Plain-text rendering of focus views and legends.
//!
//! Stands in for the map UI's detail panel: same tooltip block, same
//! display list, same color buckets, printed instead of drawn.

use move_map_dashboard::view::RegionFocus;
use move_map_flow_models::Direction;
use move_map_style::bins::{color_for, legend};

/// Prints the detail panel for a focused region.
pub fn print_focus(focus: &RegionFocus) {
    println!("{}", focus.tooltip);

    if focus.ranked.is_empty() {
        println!();
        println!("No flow data for this region and direction.");
        return;
    }

    println!();
    println!(
        "{:>4}  {:<40} {:>8} {:>6} {:>7}  {}",
        "#", "Region", "People", "HH", "Delta", "Color"
    );
    let mut any_estimated = false;
    for (index, entry) in focus.ranked.iter().enumerate() {
        let marker = if entry.estimated {
            any_estimated = true;
            "*"
        } else {
            " "
        };
        println!(
            "{:>4}  {:<40} {:>8} {:>6} {:>+6}{} {}",
            index + 1,
            entry.name,
            entry.value,
            entry.household_count,
            entry.delta,
            marker,
            color_for(entry.value, focus.direction),
        );
    }
    if any_estimated {
        println!();
        println!("* delta imputed due to a regional boundary split");
    }
}

/// Prints the legend rows for a direction.
pub fn print_legend(direction: Direction) {
    println!("{} legend (people moved)", direction.label());
    for entry in legend(direction) {
        println!("  {}  {}", entry.color, entry.label);
    }
}
