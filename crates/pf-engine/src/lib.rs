//! pf-engine: boundary to the external well-modeling engine.
//!
//! The numerical simulator is an opaque collaborator with a procedural,
//! stateful scripting interface (open, mutate, save, close). This crate pins
//! that surface down to a narrow capability abstraction so everything above it
//! is testable without the real engine:
//!
//! - [`SimulationEngine`] / [`ModelSession`]: the capability traits
//! - [`param`]: typed component kinds, parameter keys and constants
//! - [`document`]: an implementation that persists models as YAML documents
//! - [`recording`]: an implementation with an ordered call ledger and
//!   scriptable profile results, for tests and dry runs

pub mod document;
pub mod param;
pub mod recording;
pub mod session;

pub use document::{DocumentEngine, ModelDocument};
pub use param::{ComponentKind, ParamKey, ParamValue, ProfileParam, constants};
pub use recording::{EngineCall, RecordingEngine};
pub use session::{
    ModelSession, ProfileParameters, RawSimulationResults, SimulationEngine, UnitSystem,
};

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Invalid parameter {key} on {component}: {reason}")]
    InvalidParameter {
        component: String,
        key: String,
        reason: String,
    },

    #[error("Missing component: {name}")]
    MissingComponent { name: String },

    #[error("Not supported by the {engine} engine: {what}")]
    NotSupported {
        engine: &'static str,
        what: &'static str,
    },

    #[error("Simulation did not converge: {what}")]
    Convergence { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model document error: {0}")]
    Document(#[from] serde_yaml::Error),
}
