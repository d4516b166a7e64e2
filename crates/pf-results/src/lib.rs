//! pf-results: tabular views over raw engine results.

pub mod reshape;
pub mod types;

pub use reshape::reshape;
pub use types::{SimulationResult, Table};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error(
        "Case {case}: profile variable {variable} has {found} samples, expected {expected}"
    )]
    RaggedProfile {
        case: String,
        variable: String,
        expected: usize,
        found: usize,
    },
}
