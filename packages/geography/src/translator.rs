//! Census-to-admin code translation.
//!
//! The boundary dataset and the flow matrix use different region code
//! systems. The mapping between them is partial: region granularities
//! that never changed code keep the same identifier in both systems
//! and are absent from the mapping document.

use std::collections::BTreeMap;

/// Bidirectional-by-convention lookup from census codes to admin codes.
///
/// Absence from the mapping is not an error: the census code is then
/// treated as already being an admin code and returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct CodeTranslator {
    mapping: BTreeMap<String, String>,
}

impl CodeTranslator {
    /// Creates a translator from a loaded census-to-admin mapping.
    #[must_use]
    pub const fn new(mapping: BTreeMap<String, String>) -> Self {
        Self { mapping }
    }

    /// Resolves a census code to its admin code.
    ///
    /// Unmapped codes fall back to identity: the input is returned
    /// unchanged. This fallback is silent by design, since not all
    /// region granularities have a distinct admin code.
    #[must_use]
    pub fn to_admin<'a>(&'a self, census_code: &'a str) -> &'a str {
        match self.mapping.get(census_code) {
            Some(admin) => admin.as_str(),
            None => census_code,
        }
    }

    /// Whether a distinct admin code is registered for this census code.
    #[must_use]
    pub fn contains(&self, census_code: &str) -> bool {
        self.mapping.contains_key(census_code)
    }

    /// Number of registered mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the mapping document was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
