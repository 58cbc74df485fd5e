//! Terminal rendering of Karnaugh maps
//!
//! Rows and columns are printed in Gray-code order with the same `00 01 11
//! 10` labels the browser view uses.

use super::{KMap, MapHalf, GRAY_LABELS, VISUAL_ORDER};
use crate::circuit::Mode;
use std::fmt;

impl fmt::Display for MapHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "         B1B0")?;
        write!(f, "A1A0  ")?;
        for label in GRAY_LABELS {
            write!(f, " {} ", label)?;
        }
        writeln!(f)?;
        for (visual, &row) in VISUAL_ORDER.iter().enumerate() {
            write!(f, "  {}  ", GRAY_LABELS[visual])?;
            for &col in &VISUAL_ORDER {
                write!(f, "  {} ", self.cell(row, col) as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for KMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "K-Map {}", self.output())?;
        writeln!(f)?;
        writeln!(f, "{}", self.half(Mode::Addition))?;
        write!(f, "{}", self.half(Mode::Subtraction))
    }
}
