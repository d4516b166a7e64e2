//! Pressure/temperature profile runs over persisted models.

use std::path::Path;

use pf_engine::{ProfileParam, ProfileParameters, SimulationEngine, UnitSystem, constants};
use pf_results::{SimulationResult, reshape};

use crate::{ModelError, ModelResult};

/// The default profile parameter set: fix the outlet (wellhead) pressure and
/// the liquid rate, solve for the inlet pressure.
pub fn default_parameters(p_wh: f64, q_liq: f64) -> ProfileParameters {
    let mut parameters = ProfileParameters::new();
    parameters.insert(ProfileParam::OutletPressure, p_wh.into());
    parameters.insert(ProfileParam::LiquidFlowRate, q_liq.into());
    parameters.insert(
        ProfileParam::FlowRateType,
        constants::FLOW_RATE_LIQUID.into(),
    );
    parameters.insert(
        ProfileParam::CalculatedVariable,
        constants::CALCULATED_INLET_PRESSURE.into(),
    );
    parameters
}

/// Open a persisted model and run the engine's profile task for the named
/// producer.
///
/// A caller-supplied parameter set is passed through verbatim; otherwise the
/// default set is built from `p_wh` and `q_liq`, both of which must then be
/// present. Engine failures (unknown producer, bad parameter combination,
/// non-convergence) propagate unchanged.
pub fn run_profile(
    engine: &dyn SimulationEngine,
    model_path: &Path,
    model_name: &str,
    parameters: Option<ProfileParameters>,
    p_wh: Option<f64>,
    q_liq: Option<f64>,
) -> ModelResult<SimulationResult> {
    let parameters = match parameters {
        Some(parameters) => parameters,
        None => match (p_wh, q_liq) {
            (Some(p_wh), Some(q_liq)) => default_parameters(p_wh, q_liq),
            _ => return Err(ModelError::MissingBoundary),
        },
    };

    let mut session = engine.open(model_path, UnitSystem::Metric)?;
    let raw = session.run_pt_profile(model_name, &parameters)?;
    session.close()?;

    Ok(reshape(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_engine::{EngineCall, ParamValue, RawSimulationResults, RecordingEngine};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn scripted_results() -> RawSimulationResults {
        let mut raw = RawSimulationResults::default();
        raw.system.insert("SystemPressureDrop".to_string(), 41.2);
        for case in ["Case 1", "Case 2"] {
            let mut node = BTreeMap::new();
            node.insert("BottomHolePressure".to_string(), 155.0);
            raw.node.insert(case.to_string(), node);

            let mut profile = BTreeMap::new();
            profile.insert("Depth".to_string(), vec![0.0, 2400.0]);
            profile.insert("Pressure".to_string(), vec![14.0, 155.0]);
            raw.profile.insert(case.to_string(), profile);
        }
        raw
    }

    fn sent_parameters(engine: &RecordingEngine) -> ProfileParameters {
        engine
            .calls()
            .into_iter()
            .find_map(|call| match call {
                EngineCall::RunPtProfile { parameters, .. } => Some(parameters),
                _ => None,
            })
            .expect("no profile run recorded")
    }

    #[test]
    fn default_parameters_are_exactly_four() {
        let engine = RecordingEngine::with_results(scripted_results());
        run_profile(
            &engine,
            &PathBuf::from("101.pips.yaml"),
            "101",
            None,
            Some(14.0),
            Some(42.5),
        )
        .unwrap();

        let mut expected = ProfileParameters::new();
        expected.insert(ProfileParam::OutletPressure, 14.0.into());
        expected.insert(ProfileParam::LiquidFlowRate, 42.5.into());
        expected.insert(
            ProfileParam::FlowRateType,
            constants::FLOW_RATE_LIQUID.into(),
        );
        expected.insert(
            ProfileParam::CalculatedVariable,
            constants::CALCULATED_INLET_PRESSURE.into(),
        );
        assert_eq!(sent_parameters(&engine), expected);
    }

    #[test]
    fn supplied_parameters_pass_through_verbatim() {
        let engine = RecordingEngine::with_results(scripted_results());
        let mut custom = ProfileParameters::new();
        custom.insert(ProfileParam::InletPressure, 180.0.into());
        custom.insert(
            ProfileParam::CalculatedVariable,
            ParamValue::Text("OutletPressure".to_string()),
        );

        run_profile(
            &engine,
            &PathBuf::from("101.pips.yaml"),
            "101",
            Some(custom.clone()),
            // boundary values must not leak into a supplied set
            Some(14.0),
            Some(42.5),
        )
        .unwrap();

        assert_eq!(sent_parameters(&engine), custom);
    }

    #[test]
    fn missing_boundary_values_fail_before_the_engine() {
        let engine = RecordingEngine::new();
        let err = run_profile(
            &engine,
            &PathBuf::from("101.pips.yaml"),
            "101",
            None,
            Some(14.0),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::MissingBoundary));
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn results_come_back_reshaped_per_case() {
        let engine = RecordingEngine::with_results(scripted_results());
        let result = run_profile(
            &engine,
            &PathBuf::from("101.pips.yaml"),
            "101",
            None,
            Some(14.0),
            Some(42.5),
        )
        .unwrap();

        assert_eq!(result.system.get("SystemPressureDrop", "Value"), Some(41.2));
        let cases: Vec<&str> = result.profile.keys().map(String::as_str).collect();
        assert_eq!(cases, ["Case 1", "Case 2"]);
        assert_eq!(result.profile["Case 1"].n_rows(), 2);
        assert_eq!(result.nodal["Case 2"].n_rows(), 1);
    }

    #[test]
    fn engine_failures_propagate_unchanged() {
        // No scripted results: the recording engine reports non-convergence.
        let engine = RecordingEngine::new();
        let err = run_profile(
            &engine,
            &PathBuf::from("101.pips.yaml"),
            "101",
            None,
            Some(14.0),
            Some(42.5),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::Engine(pf_engine::EngineError::Convergence { .. })
        ));
    }
}
