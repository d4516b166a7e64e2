//! Duty-point pump selection.

use pf_core::ensure_non_negative;

use crate::catalog::EspCatalog;
use crate::{CatalogError, CatalogResult};

/// Pump chosen for a well's duty point. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PumpSelection {
    pub esp_id: String,
    pub stages: u32,
}

/// Select a pump for the required duty point.
///
/// The match is exact: the catalog entry whose nominal rate equals `rate_nom`.
/// The per-stage head is read off the entry's head curve at the nominal rate,
/// and the stage count is `floor(head_nom / head_per_stage) + 1`, so it is
/// always at least one.
///
/// A duty point with no exact match is a hard stop, not a recoverable default.
// TODO: proper selection across neighboring duty points instead of an exact
// nominal-rate match.
pub fn select_pump(
    catalog: &EspCatalog,
    rate_nom: f64,
    head_nom: f64,
) -> CatalogResult<PumpSelection> {
    let head_nom = ensure_non_negative(head_nom, "head_nom")?;

    for (esp_id, entry) in &catalog.entries {
        if entry.rate_nom_sm3day != rate_nom {
            continue;
        }
        let index = entry
            .rate_points
            .iter()
            .position(|r| *r == entry.rate_nom_sm3day)
            .ok_or_else(|| CatalogError::NominalRateOffCurve {
                esp_id: esp_id.clone(),
            })?;
        let head_per_stage = *entry.head_points.get(index).ok_or_else(|| {
            CatalogError::CurveLengthMismatch {
                esp_id: esp_id.clone(),
                rates: entry.rate_points.len(),
                heads: entry.head_points.len(),
            }
        })?;
        if head_per_stage <= 0.0 {
            return Err(CatalogError::NonPositiveHead {
                esp_id: esp_id.clone(),
            });
        }
        let stages = (head_nom / head_per_stage).floor() as u32 + 1;
        return Ok(PumpSelection {
            esp_id: esp_id.clone(),
            stages,
        });
    }

    Err(CatalogError::NoMatchingPump { rate_nom })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EspEntry;
    use proptest::prelude::*;

    fn one_pump(esp_id: &str, rate_nom: f64, rates: &[f64], heads: &[f64]) -> EspCatalog {
        let mut catalog = EspCatalog::default();
        catalog.entries.insert(
            esp_id.to_string(),
            EspEntry {
                rate_nom_sm3day: rate_nom,
                rate_points: rates.to_vec(),
                head_points: heads.to_vec(),
            },
        );
        catalog
    }

    #[test]
    fn selects_by_exact_nominal_rate() {
        let catalog = one_pump("50-2000", 50.0, &[10.0, 30.0, 50.0], &[5.0, 8.0, 12.0]);
        let selection = select_pump(&catalog, 50.0, 30.0).unwrap();
        assert_eq!(selection.esp_id, "50-2000");
        // head at the nominal rate is 12, so 30 m of head needs 30/12 + 1 stages
        assert_eq!(selection.stages, 3);
    }

    #[test]
    fn no_exact_match_is_an_error() {
        let catalog = one_pump("50-2000", 50.0, &[10.0, 30.0, 50.0], &[5.0, 8.0, 12.0]);
        let err = select_pump(&catalog, 60.0, 30.0).unwrap_err();
        assert!(matches!(err, CatalogError::NoMatchingPump { rate_nom } if rate_nom == 60.0));
    }

    #[test]
    fn nominal_rate_must_be_on_curve() {
        let catalog = one_pump("odd", 45.0, &[10.0, 30.0, 50.0], &[5.0, 8.0, 12.0]);
        let err = select_pump(&catalog, 45.0, 30.0).unwrap_err();
        assert!(matches!(err, CatalogError::NominalRateOffCurve { .. }));
    }

    #[test]
    fn selection_is_deterministic_across_shared_rates() {
        let mut catalog = one_pump("b-model", 50.0, &[50.0], &[10.0]);
        catalog.entries.insert(
            "a-model".to_string(),
            EspEntry {
                rate_nom_sm3day: 50.0,
                rate_points: vec![50.0],
                head_points: vec![20.0],
            },
        );
        // BTreeMap order: "a-model" wins every time
        let selection = select_pump(&catalog, 50.0, 100.0).unwrap();
        assert_eq!(selection.esp_id, "a-model");
    }

    proptest! {
        #[test]
        fn stages_follow_floor_formula(
            head_nom in 0.0..1.0e6_f64,
            head_per_stage in 0.1..1.0e4_f64,
        ) {
            let catalog = one_pump("p", 50.0, &[50.0], &[head_per_stage]);
            let selection = select_pump(&catalog, 50.0, head_nom).unwrap();
            prop_assert!(selection.stages >= 1);
            prop_assert_eq!(
                selection.stages,
                (head_nom / head_per_stage).floor() as u32 + 1
            );
        }
    }
}
