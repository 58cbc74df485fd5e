//! Karnaugh-map projection
//!
//! A [`KMap`] is a pure reshaping of the truth table into an 8×4 grid for one
//! output bit: row index `D·4 + A1·2 + A0`, column index `B1·2 + B0`. The
//! mapping is a bijection over the 32 input combinations, so every cell is
//! written exactly once and projection can be repeated at will with identical
//! results.
//!
//! Storage order is *logical* (binary). Display uses the Gray-code visual
//! ordering [`VISUAL_ORDER`] with the labels in [`GRAY_LABELS`], which is
//! what makes adjacent cells differ in a single bit on screen.
//!
//! # Examples
//!
//! ```
//! use bitcalc::{KMap, OutputBit, TruthTable};
//!
//! let table = TruthTable::generate();
//! let kmap = KMap::project(&table, OutputBit::C2);
//!
//! // D=1, A=01 is row 5; B=10 is column 2. That table row reads C2=1.
//! assert!(kmap.cell(5, 2));
//! ```

mod display;
#[cfg(test)]
mod tests;

use crate::circuit::{Inputs, Mode, OutputBit};
use crate::table::TruthTable;

/// Number of grid rows (`D`, `A1`, `A0`)
pub const ROWS: usize = 8;
/// Number of grid columns (`B1`, `B0`)
pub const COLS: usize = 4;
/// Rows per mode half
pub const HALF_ROWS: usize = 4;

/// Gray-code ordering applied to logical indices when rendering
pub const VISUAL_ORDER: [usize; 4] = [0, 1, 3, 2];
/// Header labels matching [`VISUAL_ORDER`]
pub const GRAY_LABELS: [&str; 4] = ["00", "01", "11", "10"];

/// Grid row index for an input combination
pub fn row_index(inputs: Inputs) -> usize {
    (inputs.d as usize) * 4 + (inputs.a1 as usize) * 2 + inputs.a0 as usize
}

/// Grid column index for an input combination
pub fn col_index(inputs: Inputs) -> usize {
    (inputs.b1 as usize) * 2 + inputs.b0 as usize
}

/// An 8×4 Karnaugh map for a single output bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMap {
    output: OutputBit,
    cells: [[bool; COLS]; ROWS],
}

impl KMap {
    /// Project the truth table onto the grid for one output bit
    pub fn project(table: &TruthTable, output: OutputBit) -> Self {
        let mut cells = [[false; COLS]; ROWS];
        for row in table.iter() {
            cells[row_index(row.inputs)][col_index(row.inputs)] = row.outputs.bit(output);
        }
        log::debug!("projected K-map for {}", output);
        KMap { output, cells }
    }

    /// Project all three maps in display order (`C2`, `C1`, `C0`)
    pub fn project_all(table: &TruthTable) -> [KMap; 3] {
        OutputBit::ALL.map(|output| KMap::project(table, output))
    }

    /// The output bit this map was projected for
    pub fn output(&self) -> OutputBit {
        self.output
    }

    /// Cell value at logical `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `row >= 8` or `col >= 4`.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// The 4×4 half of the grid belonging to one mode
    ///
    /// Rows 0–3 are the addition half (`D = 0`), rows 4–7 the subtraction
    /// half. Half-local row indices start at 0 in both cases, which is the
    /// coordinate space the grouping annotations use.
    pub fn half(&self, mode: Mode) -> MapHalf {
        let offset = match mode {
            Mode::Addition => 0,
            Mode::Subtraction => HALF_ROWS,
        };
        let mut cells = [[false; COLS]; HALF_ROWS];
        cells.copy_from_slice(&self.cells[offset..offset + HALF_ROWS]);
        MapHalf {
            output: self.output,
            mode,
            cells,
        }
    }
}

/// One 4×4 mode half of a Karnaugh map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHalf {
    output: OutputBit,
    mode: Mode,
    cells: [[bool; COLS]; HALF_ROWS],
}

impl MapHalf {
    /// The output bit of the parent map
    pub fn output(&self) -> OutputBit {
        self.output
    }

    /// The mode this half covers
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cell value at half-local logical `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Title shown above the half, e.g. `D = 0 (Addition)`
    pub fn title(&self) -> String {
        format!("D = {} ({})", self.mode.bit() as u8, self.mode.name())
    }
}
