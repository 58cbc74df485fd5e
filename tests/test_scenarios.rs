//! Literal end-to-end scenarios

use bitcalc::{InputLine, Inputs, KMap, Mode, OutputBit, Outputs, TruthTable};

#[test]
fn one_plus_one_is_two() {
    // D=0, A=01, B=01
    let inputs: Inputs = "00101".parse().unwrap();
    assert_eq!(inputs.a(), 1);
    assert_eq!(inputs.b(), 1);
    let outputs = inputs.outputs();
    assert_eq!(
        outputs,
        Outputs {
            c2: false,
            c1: true,
            c0: false,
        }
    );
}

#[test]
fn two_minus_one_is_one() {
    // D=1, A=10, B=01
    let inputs: Inputs = "11001".parse().unwrap();
    assert_eq!(inputs.a(), 2);
    assert_eq!(inputs.b(), 1);
    let outputs = inputs.outputs();
    assert_eq!(
        outputs,
        Outputs {
            c2: false,
            c1: false,
            c0: true,
        }
    );
}

#[test]
fn zero_minus_three_wraps_to_five() {
    // D=1, A=00, B=11: -3 wraps to 101, displayed as -3
    let inputs: Inputs = "10011".parse().unwrap();
    let outputs = inputs.outputs();
    assert_eq!(
        outputs,
        Outputs {
            c2: true,
            c1: false,
            c0: true,
        }
    );
    assert_eq!(outputs.raw(), 5);
    assert_eq!(outputs.display_value(Mode::Subtraction), -3);
}

#[test]
fn map_cell_for_row_five_column_two() {
    // D=1, A1=0, A0=1 is grid row 4*1 + 0*2 + 1 = 5; B=10 is column 2.
    // The table row for D=1, A=01, B=10 reads C2=1, C1=1, C0=1.
    let table = TruthTable::generate();
    for output in OutputBit::ALL {
        let kmap = KMap::project(&table, output);
        assert!(kmap.cell(5, 2), "{} at (5, 2)", output);
    }
}

#[test]
fn toggling_the_mode_keeps_the_operands() {
    let mut inputs: Inputs = "01010".parse().unwrap(); // D=0, A=2, B=2
    assert_eq!(inputs.mode().symbol(), '+');
    assert_eq!(inputs.outputs().raw(), 4);

    inputs.toggle(InputLine::D);

    // Only the operation changes; the operand displays stay put
    assert_eq!(inputs.mode().symbol(), '-');
    assert_eq!(inputs.a(), 2);
    assert_eq!(inputs.b(), 2);
    assert_eq!(inputs.outputs().raw(), 0);
}
