//! Per-selection view recomputation.
//!
//! A pure function of the loaded snapshot and the current selection.
//! Every selection or direction change recomputes the whole view;
//! there is no incremental update path, so repeated calls with the
//! same state produce identical views.

use std::collections::BTreeMap;

use move_map_flow::rank::rank;
use move_map_flow::store::FlowStore;
use move_map_flow_models::{Direction, FlowSummary, RankedEntry};
use move_map_geography::catalog::RegionCatalog;
use move_map_style::descriptor::RegionStyle;
use serde::{Deserialize, Serialize};

use crate::selection::Selection;

/// Everything the selected region's detail panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionFocus {
    /// Census code of the selected region.
    pub census_code: String,
    /// Admin code the flow matrix was queried with.
    pub admin_code: String,
    /// Full display name.
    pub display_name: String,
    /// Direction the totals and ranking are counted in.
    pub direction: Direction,
    /// People moved, summed over all counterparts.
    pub total_value: u64,
    /// Households moved, summed over all counterparts.
    pub total_households: u64,
    /// People per household, absent when no households were recorded.
    pub average_per_household: Option<f64>,
    /// Inflow total minus outflow total for this region.
    pub net_migration: i64,
    /// Bounded display list, strongest movers first.
    pub ranked: Vec<RankedEntry>,
    /// Tooltip text block for the rendering collaborator.
    pub tooltip: String,
}

/// One full recomputation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// The direction the view was computed for.
    pub direction: Direction,
    /// Style descriptor per region, keyed by census code.
    pub styles: BTreeMap<String, RegionStyle>,
    /// Detail panel content; absent when nothing is selected.
    pub focus: Option<RegionFocus>,
}

/// Recomputes views from the read-only snapshot parts.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    catalog: &'a RegionCatalog,
    store: &'a FlowStore,
}

impl<'a> Dashboard<'a> {
    /// Creates a dashboard over the loaded catalog and flow store.
    #[must_use]
    pub const fn new(catalog: &'a RegionCatalog, store: &'a FlowStore) -> Self {
        Self { catalog, store }
    }

    /// Computes the full view for the current selection.
    #[must_use]
    pub fn view(&self, selection: &Selection) -> DashboardView {
        let direction = selection.direction();

        let Some(census_code) = selection.selected() else {
            return DashboardView {
                direction,
                styles: self.base_styles(),
                focus: None,
            };
        };

        // A selected region missing from the catalog keeps its census
        // code as the admin code (identity fallback, same as the
        // translator's contract for unmapped codes).
        let admin_code = self.catalog.region_by_census(census_code).map_or_else(
            || census_code.to_string(),
            |region| region.admin_code.clone(),
        );

        let summary = self.store.query(&admin_code, direction);
        let focus = self.focus_for(census_code, &admin_code, direction, &summary);
        let styles = self.flow_styles(census_code, direction, &summary);

        DashboardView {
            direction,
            styles,
            focus: Some(focus),
        }
    }

    fn focus_for(
        &self,
        census_code: &str,
        admin_code: &str,
        direction: Direction,
        summary: &FlowSummary,
    ) -> RegionFocus {
        let display_name = self.catalog.name_for(admin_code).to_string();

        let ranked: Vec<RankedEntry> = rank(&summary.records)
            .into_iter()
            .map(|record| RankedEntry {
                name: self.catalog.name_for(&record.destination_admin).to_string(),
                code: record.destination_admin,
                value: record.value,
                household_count: record.household_count,
                delta: record.delta,
                estimated: record.estimated,
            })
            .collect();

        let net_migration = self.net_migration(admin_code);
        let tooltip = tooltip_text(&display_name, census_code, direction, summary, net_migration);

        RegionFocus {
            census_code: census_code.to_string(),
            admin_code: admin_code.to_string(),
            display_name,
            direction,
            total_value: summary.total_value,
            total_households: summary.total_households,
            average_per_household: summary.average_per_household(),
            net_migration,
            ranked,
            tooltip,
        }
    }

    /// Net migration: inflow total minus outflow total. The two
    /// queries stay separate; the engine never fuses directions.
    #[allow(clippy::cast_possible_wrap)]
    fn net_migration(&self, admin_code: &str) -> i64 {
        let inflow = self.store.query(admin_code, Direction::In).total_value;
        let outflow = self.store.query(admin_code, Direction::Out).total_value;
        inflow as i64 - outflow as i64
    }

    fn base_styles(&self) -> BTreeMap<String, RegionStyle> {
        self.catalog
            .regions()
            .iter()
            .map(|region| (region.census_code.clone(), RegionStyle::base()))
            .collect()
    }

    fn flow_styles(
        &self,
        selected_census: &str,
        direction: Direction,
        summary: &FlowSummary,
    ) -> BTreeMap<String, RegionStyle> {
        let values: BTreeMap<&str, u64> = summary
            .records
            .iter()
            .map(|record| (record.destination_admin.as_str(), record.value))
            .collect();

        self.catalog
            .regions()
            .iter()
            .map(|region| {
                let style = if region.census_code == selected_census {
                    RegionStyle::selected()
                } else {
                    match values.get(region.admin_code.as_str()) {
                        Some(&value) => RegionStyle::flow(value, direction),
                        // No flow toward the selection: keep the base
                        // map style rather than binning a zero.
                        None => RegionStyle::base(),
                    }
                };
                (region.census_code.clone(), style)
            })
            .collect()
    }
}

/// Renders the tooltip text block for the detail panel.
fn tooltip_text(
    display_name: &str,
    census_code: &str,
    direction: Direction,
    summary: &FlowSummary,
    net_migration: i64,
) -> String {
    let average = summary.average_per_household().map_or_else(
        || "n/a".to_string(),
        |average| format!("{average:.2} people/household"),
    );

    format!(
        "{display_name} ({census_code})\n\
         {}: {} people / {} households\n\
         Net migration: {net_migration:+}\n\
         Average move size: {average}",
        direction.label(),
        summary.total_value,
        summary.total_households,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap as Map;

    use move_map_flow::wire::parse_matrix;
    use move_map_geography::boundary::BoundaryRegion;
    use move_map_geography::translator::CodeTranslator;
    use move_map_style::bins::IN_PALETTE;

    use super::*;

    fn boundary(code: &str, name: &str) -> BoundaryRegion {
        BoundaryRegion {
            census_code: code.to_string(),
            name: name.to_string(),
        }
    }

    fn catalog() -> RegionCatalog {
        let boundaries = vec![
            boundary("11010", "Jongno-gu"),
            boundary("21010", "Jung-gu"),
            boundary("31570", "Yangpyeong-gun"),
        ];

        let mut parent_names = Map::new();
        parent_names.insert("11".to_string(), "Seoul".to_string());
        parent_names.insert("21".to_string(), "Busan".to_string());
        parent_names.insert("31".to_string(), "Gyeonggi-do".to_string());

        let mut mapping = Map::new();
        mapping.insert("31570".to_string(), "41820".to_string());

        RegionCatalog::build(&boundaries, &parent_names, &CodeTranslator::new(mapping))
    }

    fn store() -> FlowStore {
        let doc = r#"{
            "41820": {
                "in": {
                    "11010": { "val": 100, "hh_cnt": 40, "diff": 10 },
                    "21010": { "val": 5, "hh_cnt": 2, "diff": -3 }
                },
                "out": {
                    "11010": { "val": 30, "hh_cnt": 12, "diff": 2 }
                }
            }
        }"#;
        FlowStore::from_wire(parse_matrix(doc).unwrap())
    }

    #[test]
    fn unselected_view_has_base_styles_and_no_focus() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let view = dashboard.view(&Selection::new());
        assert!(view.focus.is_none());
        assert_eq!(view.styles.len(), 3);
        assert!(view.styles.values().all(|s| *s == RegionStyle::base()));
    }

    #[test]
    fn selection_queries_through_the_code_translator() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("31570");

        let view = dashboard.view(&selection);
        let focus = view.focus.unwrap();
        assert_eq!(focus.admin_code, "41820");
        assert_eq!(focus.display_name, "Gyeonggi-do Yangpyeong-gun");
        assert_eq!(focus.total_value, 105);
        assert_eq!(focus.total_households, 42);
        assert_eq!(focus.net_migration, 75);
    }

    #[test]
    fn ranked_list_resolves_display_names() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("31570");

        let focus = dashboard.view(&selection).focus.unwrap();
        let names: Vec<&str> = focus.ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Seoul Jongno-gu", "Busan Jung-gu"]);
        assert_eq!(focus.ranked[0].delta, 10);
    }

    #[test]
    fn counterpart_styles_use_flow_colors() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("31570");

        let view = dashboard.view(&selection);
        assert_eq!(view.styles["31570"], RegionStyle::selected());
        // 100 people lands in the [100, 500) bucket.
        assert_eq!(view.styles["11010"].fill_color, IN_PALETTE[3]);
        assert_eq!(view.styles["21010"].fill_color, IN_PALETTE[0]);
    }

    #[test]
    fn direction_change_recolors_and_requeries() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("31570");
        selection.toggle_direction();

        let view = dashboard.view(&selection);
        let focus = view.focus.unwrap();
        assert_eq!(focus.direction, Direction::Out);
        assert_eq!(focus.total_value, 30);
        // 21010 has no outflow record: base style, not a zero bin.
        assert_eq!(view.styles["21010"], RegionStyle::base());
    }

    #[test]
    fn selection_absent_from_flow_data_yields_zero_focus() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("11010");

        let focus = dashboard.view(&selection).focus.unwrap();
        assert_eq!(focus.total_value, 0);
        assert_eq!(focus.average_per_household, None);
        assert!(focus.ranked.is_empty());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("31570");

        assert_eq!(dashboard.view(&selection), dashboard.view(&selection));
    }

    #[test]
    fn tooltip_summarizes_the_focus() {
        let catalog = catalog();
        let store = store();
        let dashboard = Dashboard::new(&catalog, &store);

        let mut selection = Selection::new();
        selection.select("31570");

        let focus = dashboard.view(&selection).focus.unwrap();
        assert!(focus.tooltip.contains("Gyeonggi-do Yangpyeong-gun (31570)"));
        assert!(focus.tooltip.contains("Inflow: 105 people / 42 households"));
        assert!(focus.tooltip.contains("Net migration: +75"));
        assert!(focus.tooltip.contains("2.50 people/household"));
    }
}
