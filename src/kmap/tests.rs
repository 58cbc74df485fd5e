//! Tests for K-map projection

use super::*;
use crate::circuit::OutputBit;

#[test]
fn test_projection_matches_table() {
    let table = TruthTable::generate();
    for output in OutputBit::ALL {
        let kmap = KMap::project(&table, output);
        for row in table.iter() {
            assert_eq!(
                kmap.cell(row_index(row.inputs), col_index(row.inputs)),
                row.outputs.bit(output),
                "{} at {}",
                output,
                row.inputs,
            );
        }
    }
}

#[test]
fn test_projection_is_a_bijection() {
    // Every (row, col) pair must be produced by exactly one table row
    let table = TruthTable::generate();
    let mut writes = [[0u8; COLS]; ROWS];
    for row in table.iter() {
        writes[row_index(row.inputs)][col_index(row.inputs)] += 1;
    }
    for row in writes.iter() {
        for &count in row.iter() {
            assert_eq!(count, 1);
        }
    }
}

#[test]
fn test_projection_is_idempotent() {
    let table = TruthTable::generate();
    for output in OutputBit::ALL {
        assert_eq!(
            KMap::project(&table, output),
            KMap::project(&table, output)
        );
    }
}

#[test]
fn test_halves_split_on_mode() {
    let table = TruthTable::generate();
    let kmap = KMap::project(&table, OutputBit::C1);
    let add = kmap.half(Mode::Addition);
    let sub = kmap.half(Mode::Subtraction);
    for row in 0..HALF_ROWS {
        for col in 0..COLS {
            assert_eq!(add.cell(row, col), kmap.cell(row, col));
            assert_eq!(sub.cell(row, col), kmap.cell(row + HALF_ROWS, col));
        }
    }
    assert_eq!(add.title(), "D = 0 (Addition)");
    assert_eq!(sub.title(), "D = 1 (Subtraction)");
}

#[test]
fn test_visual_order_is_gray_coded() {
    // Neighbouring visual positions differ in exactly one bit
    for pair in VISUAL_ORDER.windows(2) {
        assert_eq!((pair[0] ^ pair[1]).count_ones(), 1);
    }
    // and the ordering wraps: last and first are adjacent too
    assert_eq!((VISUAL_ORDER[3] ^ VISUAL_ORDER[0]).count_ones(), 1);
}

#[test]
fn test_display_uses_gray_order() {
    let table = TruthTable::generate();
    let rendered = KMap::project(&table, OutputBit::C0).to_string();
    assert!(rendered.contains("K-Map C0"));
    assert!(rendered.contains("D = 0 (Addition)"));
    assert!(rendered.contains("D = 1 (Subtraction)"));
    assert!(rendered.contains(" 00  01  11  10"));
}
