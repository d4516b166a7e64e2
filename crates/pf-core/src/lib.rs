//! pf-core: stable foundation for petroflow.
//!
//! Contains:
//! - units (field-unit conversion factors and helpers)
//! - numeric (float guards shared by parsing and validation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::*;
