//! Boundary document parsing.
//!
//! The boundary dataset is a `GeoJSON` `FeatureCollection` whose
//! feature properties carry the census code and display name of each
//! region. Geometry is passed through untouched to the rendering
//! collaborator; only the properties feed the core.

use geojson::{FeatureCollection, GeoJson};

use crate::GeoError;

/// Property key holding the census code of a boundary feature.
pub const PROP_CENSUS_CODE: &str = "SIGUNGU_CD";

/// Property key holding the display name of a boundary feature.
pub const PROP_NAME: &str = "SIGUNGU_NM";

/// Region identity extracted from one boundary feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryRegion {
    /// Fine-grained census code.
    pub census_code: String,
    /// The region's own display name.
    pub name: String,
}

/// Parses the boundary document into per-region identities.
///
/// Feature order is preserved so that downstream iteration is
/// deterministic for the same input document.
///
/// # Errors
///
/// Returns [`GeoError`] if the document is not a `FeatureCollection`
/// or any feature lacks the census code or name property. Malformed
/// boundary data fails the whole load; it is never silently skipped.
pub fn parse_boundaries(document: &str) -> Result<Vec<BoundaryRegion>, GeoError> {
    let geojson: GeoJson = document.parse()?;
    let GeoJson::FeatureCollection(FeatureCollection { features, .. }) = geojson else {
        return Err(GeoError::NotFeatureCollection);
    };

    let mut regions = Vec::with_capacity(features.len());

    for (index, feature) in features.iter().enumerate() {
        let census_code = string_property(feature, PROP_CENSUS_CODE).ok_or_else(|| {
            GeoError::MalformedFeature {
                index,
                message: format!("missing string property {PROP_CENSUS_CODE}"),
            }
        })?;
        let name =
            string_property(feature, PROP_NAME).ok_or_else(|| GeoError::MalformedFeature {
                index,
                message: format!("missing string property {PROP_NAME}"),
            })?;

        regions.push(BoundaryRegion { census_code, name });
    }

    Ok(regions)
}

/// Reads a string-valued property from a feature.
fn string_property(feature: &geojson::Feature, key: &str) -> Option<String> {
    feature
        .properties
        .as_ref()
        .and_then(|props| props.get(key))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "SIGUNGU_CD": "11010", "SIGUNGU_NM": "Jongno-gu" },
                "geometry": { "type": "Polygon", "coordinates": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]] }
            },
            {
                "type": "Feature",
                "properties": { "SIGUNGU_CD": "31570", "SIGUNGU_NM": "Yangpyeong-gun" },
                "geometry": { "type": "Polygon", "coordinates": [[[2.0,2.0],[3.0,2.0],[3.0,3.0],[2.0,2.0]]] }
            }
        ]
    }"#;

    #[test]
    fn parses_features_in_document_order() {
        let regions = parse_boundaries(VALID).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].census_code, "11010");
        assert_eq!(regions[0].name, "Jongno-gu");
        assert_eq!(regions[1].census_code, "31570");
    }

    #[test]
    fn rejects_feature_without_code() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "SIGUNGU_NM": "Jongno-gu" },
                    "geometry": null
                }
            ]
        }"#;
        let err = parse_boundaries(doc).unwrap_err();
        assert!(matches!(err, GeoError::MalformedFeature { index: 0, .. }));
    }

    #[test]
    fn rejects_feature_without_name() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "SIGUNGU_CD": "11010" },
                    "geometry": null
                }
            ]
        }"#;
        let err = parse_boundaries(doc).unwrap_err();
        assert!(matches!(err, GeoError::MalformedFeature { index: 0, .. }));
    }

    #[test]
    fn rejects_non_collection_documents() {
        let doc = r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#;
        assert!(matches!(
            parse_boundaries(doc),
            Err(GeoError::NotFeatureCollection)
        ));
    }

    #[test]
    fn rejects_invalid_geojson() {
        assert!(matches!(
            parse_boundaries("{ not geojson }"),
            Err(GeoError::Geojson(_))
        ));
    }
}
