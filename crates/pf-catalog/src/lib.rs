//! pf-catalog: ESP pump catalog and duty-point selection.

pub mod catalog;
pub mod select;

pub use catalog::{EspCatalog, EspEntry};
pub use select::{PumpSelection, select_pump};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No pump in catalog with nominal rate {rate_nom} m3/day")]
    NoMatchingPump { rate_nom: f64 },

    #[error("Catalog entry {esp_id}: rate curve has {rates} points, head curve {heads}")]
    CurveLengthMismatch {
        esp_id: String,
        rates: usize,
        heads: usize,
    },

    #[error("Catalog entry {esp_id}: nominal rate is missing from its own rate curve")]
    NominalRateOffCurve { esp_id: String },

    #[error("Catalog entry {esp_id}: non-positive head at the nominal rate")]
    NonPositiveHead { esp_id: String },

    #[error("Invalid duty point: {0}")]
    Duty(#[from] pf_core::PfError),
}
