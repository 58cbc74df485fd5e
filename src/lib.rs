//! # bitcalc
//!
//! An educational visualizer for a 2-bit binary adder/subtractor logic
//! circuit. The circuit has five inputs — a mode bit `D` (0 = add,
//! 1 = subtract) and two 2-bit operands `A = A1 A0` and `B = B1 B0` — and a
//! 3-bit output `C2 C1 C0`. Subtraction results wrap into 3-bit two's
//! complement, so the same three wires carry `A + B` and `A - B`.
//!
//! The crate presents three synchronized views of that one boolean function:
//!
//! - the full 32-row **truth table**;
//! - three **Karnaugh maps** (one per output bit) with the hand-derived
//!   minimal sum-of-products equations and their map coverings;
//! - a live **circuit** whose inputs can be toggled and whose outputs are
//!   recomputed synchronously on every toggle.
//!
//! ## Generating and projecting
//!
//! ```
//! use bitcalc::{KMap, TruthTable};
//!
//! let table = TruthTable::generate();
//! let kmaps = KMap::project_all(&table);
//!
//! // Every map cell mirrors its truth-table row
//! assert!(kmaps[0].cell(5, 2)); // C2 for D=1, A=01, B=10
//! ```
//!
//! ## Evaluating live inputs
//!
//! ```
//! use bitcalc::{InputLine, Inputs, Mode};
//!
//! let mut inputs: Inputs = "10011".parse()?; // D=1, A=00, B=11
//! let outputs = inputs.outputs();
//! assert_eq!(outputs.raw(), 5); // 0 - 3 wraps to 101
//! assert_eq!(outputs.display_value(Mode::Subtraction), -3);
//!
//! inputs.toggle(InputLine::D); // switch to addition
//! assert_eq!(inputs.outputs().raw(), 3);
//! # Ok::<(), bitcalc::ParseInputsError>(())
//! ```
//!
//! ## Equations and groupings
//!
//! The simplified equations and the K-map coverings behind them are authored
//! reference data, not computed: this crate deliberately contains no logic
//! minimizer. See [`equation`], [`combined_equation`], and [`groupings`].
//!
//! ## Front ends
//!
//! The `cli` feature builds the `bitcalc` terminal binary; the `web` feature
//! builds the yew single-page app (`bitcalc-web`) with the tabbed browser
//! views. Both sit on the same core types above and neither is required to
//! use the library.

pub mod circuit;
pub mod equations;
pub mod kmap;
pub mod table;
pub mod view;

#[cfg(feature = "web")]
pub mod components;

pub use circuit::{
    InputLine, Inputs, Mode, OutputBit, Outputs, ParseInputsError, ParseOutputError,
};
pub use equations::{combined_equation, equation, groupings, CellSides, Grouping, Sides};
pub use kmap::{KMap, MapHalf};
pub use table::{TruthRow, TruthTable};
pub use view::{ClickOutcome, KmapPanels, RowHighlight, Selection, Tab, ToggleSet, ZoomPan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_and_evaluator_agree() {
        let table = TruthTable::generate();
        for index in 0..TruthTable::ROWS {
            let inputs = Inputs::from_index(index);
            assert_eq!(table[index].outputs, inputs.outputs());
        }
    }

    #[test]
    fn test_projection_round_trip() {
        let table = TruthTable::generate();
        for kmap in KMap::project_all(&table) {
            for row in table.iter() {
                let r = kmap::row_index(row.inputs);
                let c = kmap::col_index(row.inputs);
                assert_eq!(kmap.cell(r, c), row.outputs.bit(kmap.output()));
            }
        }
    }
}
