//! Result table types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A small rectangular table: labeled rows, named columns, f64 cells.
///
/// Every row has exactly `columns.len()` cells; `index` carries the row
/// labels (result names for system/nodal tables, sample numbers for profile
/// tables).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub index: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Cell lookup by row label and column name.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.index.iter().position(|label| label == row)?;
        let c = self.columns.iter().position(|name| name == column)?;
        self.rows.get(r)?.get(c).copied()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut label_width = 0;
        for label in &self.index {
            label_width = label_width.max(label.chars().count());
        }

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| format!("{v:.4}")).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write!(f, "{:label_width$}", "")?;
        for (name, &w) in self.columns.iter().zip(&widths) {
            write!(f, "  {name:>w$}")?;
        }
        writeln!(f)?;
        for (label, row) in self.index.iter().zip(&cells) {
            write!(f, "{label:label_width$}")?;
            for (cell, &w) in row.iter().zip(&widths) {
                write!(f, "  {cell:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The three result groups of one profile run, in tabular form.
///
/// Returned to the caller; never persisted by this system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One flat table, rows keyed by result name.
    pub system: Table,
    /// One table per simulation case, rows keyed by result name.
    pub nodal: BTreeMap<String, Table>,
    /// One table per simulation case, columns are profile variables.
    pub profile: BTreeMap<String, Table>,
}
