//! Region catalog: admin codes to display names.
//!
//! Built once after the boundary, parent-area, and code-mapping
//! documents are loaded. Read-only afterwards and freely shared.

use std::collections::BTreeMap;

use move_map_geography_models::{Region, parent_prefix};

use crate::boundary::BoundaryRegion;
use crate::translator::CodeTranslator;

/// Display metadata for every known region, keyed by both code systems.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    names: BTreeMap<String, String>,
    by_census: BTreeMap<String, usize>,
    identity_fallbacks: usize,
}

impl RegionCatalog {
    /// Builds the catalog from parsed boundaries, the parent-area name
    /// mapping (census-code prefix to name), and the code translator.
    ///
    /// Boundary order is preserved in [`Self::regions`]. A census code
    /// prefix absent from the parent-area mapping leaves the region's
    /// parent name empty; the region's own name stands alone.
    #[must_use]
    pub fn build(
        boundaries: &[BoundaryRegion],
        parent_names: &BTreeMap<String, String>,
        translator: &CodeTranslator,
    ) -> Self {
        let mut regions = Vec::with_capacity(boundaries.len());
        let mut names = BTreeMap::new();
        let mut by_census = BTreeMap::new();
        let mut identity_fallbacks = 0;

        for boundary in boundaries {
            let parent_area_name = parent_prefix(&boundary.census_code)
                .and_then(|prefix| parent_names.get(prefix))
                .cloned()
                .unwrap_or_default();

            if !translator.contains(&boundary.census_code) {
                identity_fallbacks += 1;
            }

            let region = Region {
                census_code: boundary.census_code.clone(),
                admin_code: translator.to_admin(&boundary.census_code).to_string(),
                name: boundary.name.clone(),
                parent_area_name,
            };

            names.insert(region.admin_code.clone(), region.display_name());
            by_census.insert(region.census_code.clone(), regions.len());
            regions.push(region);
        }

        Self {
            regions,
            names,
            by_census,
            identity_fallbacks,
        }
    }

    /// Display name for an admin code.
    ///
    /// Unregistered codes fall back to the raw code as display text;
    /// this never panics and never errors.
    #[must_use]
    pub fn name_for<'a>(&'a self, admin_code: &'a str) -> &'a str {
        match self.names.get(admin_code) {
            Some(name) => name.as_str(),
            None => admin_code,
        }
    }

    /// Region metadata for a census code.
    #[must_use]
    pub fn region_by_census(&self, census_code: &str) -> Option<&Region> {
        self.by_census
            .get(census_code)
            .map(|&index| &self.regions[index])
    }

    /// All regions, in boundary document order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions whose census code had no distinct admin
    /// mapping and took the identity fallback. Diagnostic only.
    #[must_use]
    pub const fn identity_fallbacks(&self) -> usize {
        self.identity_fallbacks
    }

    /// Number of cataloged regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the boundary document held no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
