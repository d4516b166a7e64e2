//! Engine capability traits.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::EngineResult;
use crate::param::{ComponentKind, ParamKey, ParamValue, ProfileParam};

/// Unit system a model is created and opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Field,
}

/// Parameter set for a pressure/temperature profile run.
///
/// Callers either take the default set the profile runner builds or supply a
/// full replacement; there is no merging.
pub type ProfileParameters = BTreeMap<ProfileParam, ParamValue>;

/// The engine's three result groups, exactly as returned by the profile task.
///
/// `system` is flat; `node` and `profile` are keyed by simulation case.
/// Profile variables are sampled along the flow path, one value per station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSimulationResults {
    pub system: BTreeMap<String, f64>,
    pub node: BTreeMap<String, BTreeMap<String, f64>>,
    pub profile: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

/// Factory surface of the external engine.
///
/// Implementations must be thread-safe (Send + Sync); sessions themselves are
/// single-threaded, matching the engine's one-open-model-at-a-time contract.
pub trait SimulationEngine: Send + Sync {
    /// Engine name for logging and error context.
    fn name(&self) -> &str;

    /// Create a fresh model file at `path`.
    fn create(
        &self,
        path: &Path,
        units: UnitSystem,
        overwrite: bool,
    ) -> EngineResult<Box<dyn ModelSession>>;

    /// Open an existing model file.
    fn open(&self, path: &Path, units: UnitSystem) -> EngineResult<Box<dyn ModelSession>>;
}

/// One open model. Calls mutate engine-side state in order; the builder above
/// this trait relies on that ordering.
pub trait ModelSession {
    /// Create a named component, optionally inside a context component
    /// (a well), with its creation-time parameters.
    fn add_component(
        &mut self,
        kind: ComponentKind,
        name: &str,
        context: Option<&str>,
        params: &[(ParamKey, ParamValue)],
    ) -> EngineResult<()>;

    /// Set a single parameter on a component owned by the named well.
    ///
    /// Some parameters (ESP stage count) are only accepted after the owning
    /// component exists, which is why this is separate from creation.
    fn set_parameter(&mut self, well: &str, key: ParamKey, value: ParamValue) -> EngineResult<()>;

    /// Attach a deviation trajectory to a well as paired true-vertical-depth
    /// and measured-depth sequences.
    fn set_trajectory(&mut self, context: &str, tvd: &[f64], md: &[f64]) -> EngineResult<()>;

    /// Run the pressure/temperature profile task for the named producer.
    fn run_pt_profile(
        &mut self,
        producer: &str,
        parameters: &ProfileParameters,
    ) -> EngineResult<RawSimulationResults>;

    /// Persist the model to its backing file.
    fn save(&mut self) -> EngineResult<()>;

    /// Close the session. Closing does not save.
    fn close(self: Box<Self>) -> EngineResult<()>;
}
