//! Reshaping of the engine's nested result groups into tables.

use std::collections::BTreeMap;

use pf_engine::RawSimulationResults;

use crate::types::{SimulationResult, Table};
use crate::{ResultsError, ResultsResult};

/// Reshape raw engine output into [`SimulationResult`] tables.
///
/// System results become one table with rows keyed by result name; nodal
/// results become one such table per case; profile results become one table
/// per case whose columns are the profile variables, in the order the engine
/// returned them.
pub fn reshape(raw: &RawSimulationResults) -> ResultsResult<SimulationResult> {
    let system = keyed_values_table(&raw.system);

    let nodal = raw
        .node
        .iter()
        .map(|(case, values)| (case.clone(), keyed_values_table(values)))
        .collect();

    let mut profile = BTreeMap::new();
    for (case, variables) in &raw.profile {
        profile.insert(case.clone(), profile_table(case, variables)?);
    }

    Ok(SimulationResult {
        system,
        nodal,
        profile,
    })
}

fn keyed_values_table(values: &BTreeMap<String, f64>) -> Table {
    Table {
        columns: vec!["Value".to_string()],
        index: values.keys().cloned().collect(),
        rows: values.values().map(|v| vec![*v]).collect(),
    }
}

fn profile_table(case: &str, variables: &BTreeMap<String, Vec<f64>>) -> ResultsResult<Table> {
    let n_samples = variables.values().next().map_or(0, Vec::len);
    for (variable, samples) in variables {
        if samples.len() != n_samples {
            return Err(ResultsError::RaggedProfile {
                case: case.to_string(),
                variable: variable.clone(),
                expected: n_samples,
                found: samples.len(),
            });
        }
    }

    let columns: Vec<String> = variables.keys().cloned().collect();
    let rows = (0..n_samples)
        .map(|i| variables.values().map(|samples| samples[i]).collect())
        .collect();

    Ok(Table {
        columns,
        index: (0..n_samples).map(|i| i.to_string()).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_case_raw() -> RawSimulationResults {
        let mut raw = RawSimulationResults::default();
        raw.system.insert("SystemPressureDrop".to_string(), 41.2);
        raw.system.insert("SystemTemperatureDrop".to_string(), 12.0);

        for case in ["Case 1", "Case 2"] {
            let mut node = BTreeMap::new();
            node.insert("BottomHolePressure".to_string(), 155.0);
            node.insert("WellheadTemperature".to_string(), 28.0);
            raw.node.insert(case.to_string(), node);

            let mut profile = BTreeMap::new();
            profile.insert("Depth".to_string(), vec![0.0, 1200.0, 2400.0]);
            profile.insert("Pressure".to_string(), vec![14.0, 90.0, 155.0]);
            profile.insert("Temperature".to_string(), vec![20.0, 55.0, 89.0]);
            raw.profile.insert(case.to_string(), profile);
        }
        raw
    }

    #[test]
    fn two_cases_in_two_cases_out() {
        let raw = two_case_raw();
        let result = reshape(&raw).unwrap();

        assert_eq!(result.system.n_rows(), 2);
        assert_eq!(result.system.get("SystemPressureDrop", "Value"), Some(41.2));

        let cases: Vec<&str> = result.nodal.keys().map(String::as_str).collect();
        assert_eq!(cases, ["Case 1", "Case 2"]);
        assert_eq!(result.nodal["Case 1"].n_rows(), 2);

        assert_eq!(result.profile.len(), 2);
        let table = &result.profile["Case 2"];
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.get("2", "Pressure"), Some(155.0));
    }

    #[test]
    fn reshaping_twice_gives_the_same_tables() {
        let raw = two_case_raw();
        assert_eq!(reshape(&raw).unwrap(), reshape(&raw).unwrap());
    }

    #[test]
    fn ragged_profile_variables_are_rejected() {
        let mut raw = two_case_raw();
        raw.profile
            .get_mut("Case 1")
            .unwrap()
            .insert("Holdup".to_string(), vec![0.1]);
        let err = reshape(&raw).unwrap_err();
        assert!(matches!(err, ResultsError::RaggedProfile { .. }));
    }
}
