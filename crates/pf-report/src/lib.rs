//! pf-report: tech-regime well report parsing.
//!
//! Reads the fixed-layout tabular report exported from the field database and
//! produces one [`WellRecord`] per data row. Column positions are the contract
//! with the upstream report producer; they live in one place, [`columns`].

pub mod columns;
pub mod parser;
pub mod schema;
pub mod validate;

pub use parser::{parse, parse_reader};
pub use schema::WellRecord;
pub use validate::validate_records;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: report has {found} columns, layout needs at least {needed}")]
    ShortRow {
        row: usize,
        needed: usize,
        found: usize,
    },

    #[error("Row {row}, column {column} ({field}): not a number: {value:?}")]
    BadNumber {
        row: usize,
        column: usize,
        field: &'static str,
        value: String,
    },

    #[error("Record {index}: well name is empty")]
    EmptyWellName { index: usize },

    #[error("Duplicate well name: {name}")]
    DuplicateWellName { name: String },

    #[error("Well {well}: {source}")]
    InvalidValue {
        well: String,
        source: pf_core::PfError,
    },
}
