//! CSV serialization of the current display list.
//!
//! The rows come straight from the focus's ranked list, so the file
//! always matches what was just printed.

use std::path::Path;

use move_map_dashboard::export::export_rows;
use move_map_dashboard::view::RegionFocus;

/// Writes the focus's display list to a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row fails to
/// serialize.
pub fn write_csv(focus: &RegionFocus, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in export_rows(focus) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
