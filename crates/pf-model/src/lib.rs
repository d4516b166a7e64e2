//! pf-model: well model construction and profile runs.
//!
//! Translates a [`pf_report::WellRecord`] into the ordered component-creation
//! sequence the engine expects, and drives pressure/temperature profile runs
//! over persisted models.

pub mod builder;
pub mod profile;

pub use builder::{ESP_LIFT_MARKER, build_model};
pub use profile::{default_parameters, run_profile};

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Well {well}: required field {field} is missing from the report")]
    MissingField { well: String, field: &'static str },

    #[error("Profile run needs either a parameter set or both p_wh and q_liq")]
    MissingBoundary,

    #[error(transparent)]
    Catalog(#[from] pf_catalog::CatalogError),

    #[error(transparent)]
    Engine(#[from] pf_engine::EngineError),

    #[error(transparent)]
    Results(#[from] pf_results::ResultsError),
}
