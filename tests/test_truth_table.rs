//! Golden reference test for the generated truth table
//!
//! The 32-row table is a fixed constant of the circuit. The generator
//! computes it; this literal copy pins it bit-for-bit.

use bitcalc::{Inputs, TruthTable};

/// `(input word D A1 A0 B1 B0, output word C2 C1 C0)` in row order
const REFERENCE: [(u8, u8); 32] = [
    // D = 0: addition
    (0b00000, 0b000),
    (0b00001, 0b001),
    (0b00010, 0b010),
    (0b00011, 0b011),
    (0b00100, 0b001),
    (0b00101, 0b010),
    (0b00110, 0b011),
    (0b00111, 0b100),
    (0b01000, 0b010),
    (0b01001, 0b011),
    (0b01010, 0b100),
    (0b01011, 0b101),
    (0b01100, 0b011),
    (0b01101, 0b100),
    (0b01110, 0b101),
    (0b01111, 0b110),
    // D = 1: subtraction
    (0b10000, 0b000),
    (0b10001, 0b111),
    (0b10010, 0b110),
    (0b10011, 0b101),
    (0b10100, 0b001),
    (0b10101, 0b000),
    (0b10110, 0b111),
    (0b10111, 0b110),
    (0b11000, 0b010),
    (0b11001, 0b001),
    (0b11010, 0b000),
    (0b11011, 0b111),
    (0b11100, 0b011),
    (0b11101, 0b010),
    (0b11110, 0b001),
    (0b11111, 0b000),
];

#[test]
fn generated_table_matches_reference() {
    let table = TruthTable::generate();
    assert_eq!(table.rows().len(), REFERENCE.len());
    for (index, &(input_word, output_word)) in REFERENCE.iter().enumerate() {
        let row = table[index];
        assert_eq!(
            row.inputs.index(),
            input_word as usize,
            "row {} input word",
            index
        );
        assert_eq!(
            row.outputs.raw(),
            output_word,
            "row {} ({}) output word",
            index,
            row.inputs,
        );
    }
}

#[test]
fn evaluator_agrees_with_reference() {
    for &(input_word, output_word) in REFERENCE.iter() {
        let inputs = Inputs::from_index(input_word as usize);
        assert_eq!(inputs.outputs().raw(), output_word, "inputs {}", inputs);
    }
}

#[test]
fn every_input_combination_appears_exactly_once() {
    let table = TruthTable::generate();
    let mut seen = [false; 32];
    for row in table.iter() {
        let index = row.inputs.index();
        assert!(!seen[index], "duplicate input combination {}", row.inputs);
        seen[index] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
