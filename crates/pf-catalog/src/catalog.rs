//! Catalog document: pump model id -> nominal rate and rate/head curve.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, CatalogResult};

/// One pump model: nominal rate plus its rate-to-head characteristic,
/// sampled at matching indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EspEntry {
    pub rate_nom_sm3day: f64,
    pub rate_points: Vec<f64>,
    pub head_points: Vec<f64>,
}

/// Pump catalog keyed by model identifier.
///
/// A `BTreeMap` keeps iteration order deterministic, so selection is stable
/// when several models share a nominal rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EspCatalog {
    pub entries: BTreeMap<String, EspEntry>,
}

impl EspCatalog {
    /// Load and validate a JSON catalog file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> CatalogResult<()> {
        for (esp_id, entry) in &self.entries {
            if entry.rate_points.len() != entry.head_points.len() {
                return Err(CatalogError::CurveLengthMismatch {
                    esp_id: esp_id.clone(),
                    rates: entry.rate_points.len(),
                    heads: entry.head_points.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_keyed_entries() {
        let catalog = EspCatalog::from_json(
            r#"{
                "50-2000": {
                    "rate_nom_sm3day": 50.0,
                    "rate_points": [10.0, 30.0, 50.0],
                    "head_points": [5.0, 8.0, 12.0]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries["50-2000"].rate_nom_sm3day, 50.0);
    }

    #[test]
    fn rejects_ragged_curves() {
        let err = EspCatalog::from_json(
            r#"{
                "bad": {
                    "rate_nom_sm3day": 50.0,
                    "rate_points": [10.0, 50.0],
                    "head_points": [5.0]
                }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::CurveLengthMismatch { .. }));
    }
}
