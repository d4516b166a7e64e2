//! Batch invariants over parsed records.

use std::collections::HashSet;

use crate::schema::WellRecord;
use crate::{ReportError, ReportResult};

/// Enforce the record invariants across one parsed batch: well names present
/// and unique, geometry and pressure fields non-negative where present.
pub fn validate_records(records: &[WellRecord]) -> ReportResult<()> {
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if record.well_name.trim().is_empty() {
            return Err(ReportError::EmptyWellName { index });
        }
        if !seen.insert(record.well_name.as_str()) {
            return Err(ReportError::DuplicateWellName {
                name: record.well_name.clone(),
            });
        }
        record
            .check_magnitudes()
            .map_err(|source| ReportError::InvalidValue {
                well: record.well_name.clone(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> WellRecord {
        WellRecord {
            well_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_distinct_names() {
        assert!(validate_records(&[named("101"), named("102")]).is_ok());
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = validate_records(&[named("101"), named("101")]).unwrap_err();
        assert!(matches!(err, ReportError::DuplicateWellName { .. }));
    }

    #[test]
    fn rejects_empty_name() {
        let err = validate_records(&[named("  ")]).unwrap_err();
        assert!(matches!(err, ReportError::EmptyWellName { index: 0 }));
    }

    #[test]
    fn rejects_negative_pressure() {
        let mut rec = named("101");
        rec.p_res = Some(-5.0);
        let err = validate_records(&[rec]).unwrap_err();
        assert!(matches!(err, ReportError::InvalidValue { .. }));
    }
}
