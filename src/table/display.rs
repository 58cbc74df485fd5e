//! Terminal rendering of the truth table

use super::TruthTable;
use std::fmt;

impl fmt::Display for TruthTable {
    /// Render the table in the column order of the on-screen view:
    /// row number, the five inputs, then the three outputs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  # | D A1 A0 B1 B0 | C2 C1 C0")?;
        writeln!(f, "----+---------------+---------")?;
        for (index, row) in self.iter().enumerate() {
            let i = row.inputs;
            let o = row.outputs;
            writeln!(
                f,
                " {:>2} | {}  {}  {}  {}  {} |  {}  {}  {}",
                index + 1,
                i.d as u8,
                i.a1 as u8,
                i.a0 as u8,
                i.b1 as u8,
                i.b0 as u8,
                o.c2 as u8,
                o.c1 as u8,
                o.c0 as u8,
            )?;
        }
        Ok(())
    }
}
