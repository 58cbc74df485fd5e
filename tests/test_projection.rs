//! Projection properties of the Karnaugh maps

use bitcalc::kmap::{col_index, row_index, COLS, ROWS};
use bitcalc::{KMap, OutputBit, TruthTable};
use test_log::test;

#[test]
fn every_cell_mirrors_its_table_row() {
    let table = TruthTable::generate();
    for output in OutputBit::ALL {
        let kmap = KMap::project(&table, output);
        for row in table.iter() {
            assert_eq!(
                kmap.cell(row_index(row.inputs), col_index(row.inputs)),
                row.outputs.bit(output)
            );
        }
    }
}

#[test]
fn index_mapping_is_a_bijection() {
    let table = TruthTable::generate();
    let mut hits = [[false; COLS]; ROWS];
    for row in table.iter() {
        let (r, c) = (row_index(row.inputs), col_index(row.inputs));
        assert!(!hits[r][c], "cell ({}, {}) written twice", r, c);
        hits[r][c] = true;
    }
    assert!(hits.iter().flatten().all(|&hit| hit));
}

#[test]
fn repeated_projection_is_identical() {
    let table = TruthTable::generate();
    let first = KMap::project_all(&table);
    let second = KMap::project_all(&TruthTable::generate());
    assert_eq!(first, second);
}

#[test]
fn project_all_is_in_display_order() {
    let table = TruthTable::generate();
    let kmaps = KMap::project_all(&table);
    assert_eq!(
        kmaps.map(|k| k.output()),
        [OutputBit::C2, OutputBit::C1, OutputBit::C0]
    );
}
