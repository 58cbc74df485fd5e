//! Truth-table generation
//!
//! The truth table is the fixed 32-row enumeration of every input combination
//! `(D, A1, A0, B1, B0)` together with the circuit outputs `(C2, C1, C0)`.
//! Rows are generated once, in natural binary counting order with `D` as the
//! highest bit, and never mutated. Generation is deterministic: repeated
//! calls yield identical tables.
//!
//! # Examples
//!
//! ```
//! use bitcalc::TruthTable;
//!
//! let table = TruthTable::generate();
//! assert_eq!(table.rows().len(), 32);
//!
//! // Row 5 is D=0, A=01, B=01: 1 + 1 = 2
//! assert_eq!(table[5].outputs.raw(), 2);
//! ```

mod display;
#[cfg(test)]
mod tests;

use crate::circuit::{Inputs, Outputs};
use std::ops::Index;

/// One row of the truth table: five input bits and their three output bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow {
    /// The input combination this row describes
    pub inputs: Inputs,
    /// The circuit outputs for that combination
    pub outputs: Outputs,
}

/// The complete 32-row truth table of the adder/subtractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable {
    rows: [TruthRow; 32],
}

impl TruthTable {
    /// Number of rows (one per distinct input combination)
    pub const ROWS: usize = 32;

    /// Enumerate every input combination and evaluate the circuit for each
    ///
    /// Row `i` always holds the input tuple whose natural binary index is
    /// `i`, so the table doubles as a lookup from input word to outputs.
    pub fn generate() -> Self {
        let mut rows = [TruthRow {
            inputs: Inputs::default(),
            outputs: Outputs::default(),
        }; Self::ROWS];
        for (index, row) in rows.iter_mut().enumerate() {
            let inputs = Inputs::from_index(index);
            *row = TruthRow {
                inputs,
                outputs: inputs.outputs(),
            };
        }
        log::debug!("generated {}-row truth table", Self::ROWS);
        TruthTable { rows }
    }

    /// All rows in natural binary counting order
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Iterate over the rows
    pub fn iter(&self) -> std::slice::Iter<'_, TruthRow> {
        self.rows.iter()
    }

    /// The row for a given input combination
    pub fn row_for(&self, inputs: Inputs) -> &TruthRow {
        &self.rows[inputs.index()]
    }
}

impl Index<usize> for TruthTable {
    type Output = TruthRow;

    fn index(&self, index: usize) -> &TruthRow {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthRow;
    type IntoIter = std::slice::Iter<'a, TruthRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::generate()
    }
}
