//! Tests for truth-table generation

use super::*;
use crate::circuit::Mode;

#[test]
fn test_natural_counting_order() {
    let table = TruthTable::generate();
    for (index, row) in table.iter().enumerate() {
        assert_eq!(row.inputs.index(), index);
    }
    // First sixteen rows are addition, the rest subtraction
    for (index, row) in table.iter().enumerate() {
        let expected = if index < 16 {
            Mode::Addition
        } else {
            Mode::Subtraction
        };
        assert_eq!(row.inputs.mode(), expected);
    }
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(TruthTable::generate(), TruthTable::generate());
}

#[test]
fn test_row_for_lookup() {
    let table = TruthTable::generate();
    let inputs = "11011".parse().unwrap();
    let row = table.row_for(inputs);
    assert_eq!(row.inputs, inputs);
    // A=2, B=3, subtraction: wraps to 7
    assert_eq!(row.outputs.raw(), 7);
}

#[test]
fn test_display_lists_every_row() {
    let rendered = TruthTable::generate().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2 + 32);
    assert!(lines[0].contains("D A1 A0 B1 B0"));
    assert!(lines[2].starts_with("  1 | 0  0  0  0  0"));
    assert!(lines[33].starts_with(" 32 | 1  1  1  1  1"));
}
