//! Recording engine: an ordered ledger of every scripting call.
//!
//! Sessions share one ledger, so a save/close/reopen cycle shows up in the
//! exact order it happened. Profile runs replay a scripted result when one was
//! provided and report non-convergence otherwise, which lets both the happy
//! path and the failure path be exercised without a real engine.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::param::{ComponentKind, ParamKey, ParamValue};
use crate::session::{
    ModelSession, ProfileParameters, RawSimulationResults, SimulationEngine, UnitSystem,
};
use crate::{EngineError, EngineResult};

/// One recorded scripting call.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Create {
        path: PathBuf,
        units: UnitSystem,
        overwrite: bool,
    },
    Open {
        path: PathBuf,
        units: UnitSystem,
    },
    AddComponent {
        kind: ComponentKind,
        name: String,
        context: Option<String>,
        params: Vec<(ParamKey, ParamValue)>,
    },
    SetParameter {
        well: String,
        key: ParamKey,
        value: ParamValue,
    },
    SetTrajectory {
        context: String,
        tvd: Vec<f64>,
        md: Vec<f64>,
    },
    RunPtProfile {
        producer: String,
        parameters: ProfileParameters,
    },
    Save,
    Close,
}

/// Engine whose sessions only record what was asked of them.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    scripted: Option<RawSimulationResults>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recording engine whose profile runs return the given results.
    pub fn with_results(results: RawSimulationResults) -> Self {
        Self {
            calls: Arc::default(),
            scripted: Some(results),
        }
    }

    /// Snapshot of the ledger in call order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().expect("ledger lock poisoned").clone()
    }

    fn push(&self, call: EngineCall) {
        self.calls.lock().expect("ledger lock poisoned").push(call);
    }
}

impl SimulationEngine for RecordingEngine {
    fn name(&self) -> &str {
        "recording"
    }

    fn create(
        &self,
        path: &Path,
        units: UnitSystem,
        overwrite: bool,
    ) -> EngineResult<Box<dyn ModelSession>> {
        self.push(EngineCall::Create {
            path: path.to_path_buf(),
            units,
            overwrite,
        });
        Ok(Box::new(RecordingSession {
            engine: self.clone(),
        }))
    }

    fn open(&self, path: &Path, units: UnitSystem) -> EngineResult<Box<dyn ModelSession>> {
        self.push(EngineCall::Open {
            path: path.to_path_buf(),
            units,
        });
        Ok(Box::new(RecordingSession {
            engine: self.clone(),
        }))
    }
}

struct RecordingSession {
    engine: RecordingEngine,
}

impl ModelSession for RecordingSession {
    fn add_component(
        &mut self,
        kind: ComponentKind,
        name: &str,
        context: Option<&str>,
        params: &[(ParamKey, ParamValue)],
    ) -> EngineResult<()> {
        self.engine.push(EngineCall::AddComponent {
            kind,
            name: name.to_string(),
            context: context.map(str::to_string),
            params: params.to_vec(),
        });
        Ok(())
    }

    fn set_parameter(&mut self, well: &str, key: ParamKey, value: ParamValue) -> EngineResult<()> {
        self.engine.push(EngineCall::SetParameter {
            well: well.to_string(),
            key,
            value,
        });
        Ok(())
    }

    fn set_trajectory(&mut self, context: &str, tvd: &[f64], md: &[f64]) -> EngineResult<()> {
        self.engine.push(EngineCall::SetTrajectory {
            context: context.to_string(),
            tvd: tvd.to_vec(),
            md: md.to_vec(),
        });
        Ok(())
    }

    fn run_pt_profile(
        &mut self,
        producer: &str,
        parameters: &ProfileParameters,
    ) -> EngineResult<RawSimulationResults> {
        self.engine.push(EngineCall::RunPtProfile {
            producer: producer.to_string(),
            parameters: parameters.clone(),
        });
        self.engine
            .scripted
            .clone()
            .ok_or_else(|| EngineError::Convergence {
                what: format!("no scripted results for producer {producer}"),
            })
    }

    fn save(&mut self) -> EngineResult<()> {
        self.engine.push(EngineCall::Save);
        Ok(())
    }

    fn close(self: Box<Self>) -> EngineResult<()> {
        self.engine.push(EngineCall::Close);
        Ok(())
    }
}
