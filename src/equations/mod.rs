//! Authored boolean equations and K-map groupings
//!
//! Everything in this module is reference data, not derived output. The
//! equations are the hand-derived minimal sum-of-products for each output bit
//! and mode, and the groupings are the rectangular (and wraparound) coverings
//! that justify them on the map. The test suite pins both as golden values;
//! no simplification algorithm exists anywhere in this crate.

mod groupings;
#[cfg(test)]
mod tests;

pub use groupings::{groupings, CellSides, Grouping, Sides};

use crate::circuit::{Mode, OutputBit};

/// The simplified boolean expression for one output bit in one mode
///
/// # Examples
///
/// ```
/// use bitcalc::{equation, Mode, OutputBit};
///
/// assert_eq!(equation(OutputBit::C0, Mode::Addition), "A0 ⊕ B0");
/// ```
pub fn equation(output: OutputBit, mode: Mode) -> &'static str {
    match (output, mode) {
        (OutputBit::C2, Mode::Addition) => "A1·B1 + A1·A0·B0 + A0·B1·B0",
        (OutputBit::C1, Mode::Addition) => {
            "A1·B̅1·B̅0 + A1·A̅0·B̅1 + A̅1·A̅0·B1 + A̅0·B1·B̅0 + A̅1·A0·B̅1·B0 + A1·A0·B1·B0"
        }
        (OutputBit::C0, Mode::Addition) => "A0 ⊕ B0",
        (OutputBit::C2, Mode::Subtraction) => "A̅1·B1 + A̅0·B1·B0 + A̅1·A̅0·B0",
        (OutputBit::C1, Mode::Subtraction) => {
            "A1·B̅1·B̅0 + A1·A0·B̅1 + A̅1·A0·B1 + A̅1·B1·B̅0 + A̅1·A̅0·B̅1·B0 + A1·A̅0·B1·B0"
        }
        (OutputBit::C0, Mode::Subtraction) => "A0 ⊕ B0",
    }
}

/// Both mode equations folded into one expression over `D`
///
/// # Examples
///
/// ```
/// use bitcalc::{combined_equation, OutputBit};
///
/// assert_eq!(
///     combined_equation(OutputBit::C0),
///     "C0 = D̅·(A0 ⊕ B0) + D·(A0 ⊕ B0)",
/// );
/// ```
pub fn combined_equation(output: OutputBit) -> String {
    format!(
        "{} = D̅·({}) + D·({})",
        output,
        equation(output, Mode::Addition),
        equation(output, Mode::Subtraction)
    )
}

/// Expanded form of the XOR shown alongside the `C0` equation
pub const C0_XOR_EXPANSION: &str = "(A̅0·B0 + A0·B̅0)";

/// The worked simplification shown for `C0`, one line per step
pub const C0_SIMPLIFICATION_STEPS: [&str; 4] = [
    "C0 = D̅·(A0 ⊕ B0) + D·(A0 ⊕ B0)",
    "C0 = (A0 ⊕ B0)·(D̅ + D)",
    "C0 = (A0 ⊕ B0)·(1)",
    "C0 = A0 ⊕ B0",
];
