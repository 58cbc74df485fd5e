//! Golden-value tests for the authored equations and groupings

use super::*;
use crate::circuit::{Mode, OutputBit};

#[test]
fn test_equation_strings_are_fixed() {
    assert_eq!(
        equation(OutputBit::C2, Mode::Addition),
        "A1·B1 + A1·A0·B0 + A0·B1·B0"
    );
    assert_eq!(
        equation(OutputBit::C1, Mode::Addition),
        "A1·B̅1·B̅0 + A1·A̅0·B̅1 + A̅1·A̅0·B1 + A̅0·B1·B̅0 + A̅1·A0·B̅1·B0 + A1·A0·B1·B0"
    );
    assert_eq!(equation(OutputBit::C0, Mode::Addition), "A0 ⊕ B0");
    assert_eq!(
        equation(OutputBit::C2, Mode::Subtraction),
        "A̅1·B1 + A̅0·B1·B0 + A̅1·A̅0·B0"
    );
    assert_eq!(
        equation(OutputBit::C1, Mode::Subtraction),
        "A1·B̅1·B̅0 + A1·A0·B̅1 + A̅1·A0·B1 + A̅1·B1·B̅0 + A̅1·A̅0·B̅1·B0 + A1·A̅0·B1·B0"
    );
    assert_eq!(equation(OutputBit::C0, Mode::Subtraction), "A0 ⊕ B0");
}

#[test]
fn test_combined_equation_format() {
    assert_eq!(
        combined_equation(OutputBit::C2),
        "C2 = D̅·(A1·B1 + A1·A0·B0 + A0·B1·B0) + D·(A̅1·B1 + A̅0·B1·B0 + A̅1·A̅0·B0)"
    );
    assert_eq!(
        combined_equation(OutputBit::C0),
        "C0 = D̅·(A0 ⊕ B0) + D·(A0 ⊕ B0)"
    );
}

#[test]
fn test_group_counts_per_key() {
    for mode in Mode::ALL {
        assert_eq!(groupings(OutputBit::C0, mode).len(), 2);
        assert_eq!(groupings(OutputBit::C2, mode).len(), 3);
        assert_eq!(groupings(OutputBit::C1, mode).len(), 6);
    }
    // C0 shares one covering between the modes
    assert_eq!(
        groupings(OutputBit::C0, Mode::Addition),
        groupings(OutputBit::C0, Mode::Subtraction)
    );
}

#[test]
fn test_c0_wraparound_geometry() {
    let groups = groupings(OutputBit::C0, Mode::Addition);

    let odd_a0 = &groups[0];
    assert_eq!(odd_a0.rows, &[1, 3]);
    assert_eq!(odd_a0.cols, &[0, 2]);
    assert_eq!(odd_a0.label, "A̅0+B0");
    assert_eq!(odd_a0.color, "rgba(59, 130, 246, 0.25)");
    // The group wraps across the left/right map edge: no outline on the
    // side facing the wrap.
    assert_eq!(odd_a0.sides(1, 0), Sides::new(true, true, true, false));
    assert_eq!(odd_a0.sides(1, 2), Sides::new(true, false, true, true));
    assert_eq!(odd_a0.sides(3, 2), Sides::new(true, false, true, true));
    assert_eq!(odd_a0.sides(3, 0), Sides::new(true, true, true, false));

    let odd_b0 = &groups[1];
    assert_eq!(odd_b0.rows, &[2, 0]);
    assert_eq!(odd_b0.cols, &[1, 3]);
    assert_eq!(odd_b0.label, "A0+B̅0");
    assert_eq!(odd_b0.sides(2, 1), Sides::new(true, true, false, true));
    assert_eq!(odd_b0.sides(0, 1), Sides::new(false, true, true, true));
}

#[test]
fn test_c2_addition_geometry() {
    let groups = groupings(OutputBit::C2, Mode::Addition);
    assert_eq!(
        groups.iter().map(|g| g.label).collect::<Vec<_>>(),
        ["A1B1", "A1A0B0", "A0B1B0"]
    );
    let a1b1 = &groups[0];
    assert_eq!(a1b1.rows, &[2, 3]);
    assert_eq!(a1b1.cols, &[2, 3]);
    assert_eq!(a1b1.cells().count(), 4);
    assert_eq!(a1b1.sides(3, 2), Sides::new(true, true, false, false));
    assert_eq!(a1b1.sides(2, 3), Sides::new(false, false, true, true));
}

#[test]
fn test_c1_label_punctuation_differs_between_modes() {
    // The authored covering writes addition labels without separators and
    // subtraction labels with them; both are reproduced verbatim.
    let add: Vec<_> = groupings(OutputBit::C1, Mode::Addition)
        .iter()
        .map(|g| g.label)
        .collect();
    let sub: Vec<_> = groupings(OutputBit::C1, Mode::Subtraction)
        .iter()
        .map(|g| g.label)
        .collect();
    assert_eq!(
        add,
        [
            "A1B̅1B̅0",
            "A1A̅0B̅1",
            "A̅1A̅0B1",
            "A̅0B1B̅0",
            "A̅1A0B̅1B0",
            "A1A0B1B0"
        ]
    );
    assert_eq!(
        sub,
        [
            "A1·B̅1·B̅0",
            "A1·A0·B̅1",
            "A̅1·A0·B1",
            "A̅1·B1·B̅0",
            "A̅1·A̅0·B̅1·B0",
            "A1·A̅0·B1·B0"
        ]
    );
}

#[test]
fn test_shared_palette_across_modes() {
    for output in [OutputBit::C2, OutputBit::C1] {
        let add = groupings(output, Mode::Addition);
        let sub = groupings(output, Mode::Subtraction);
        for (a, s) in add.iter().zip(sub) {
            assert_eq!(a.color, s.color);
        }
    }
}

#[test]
fn test_single_cell_groups_have_full_outline() {
    let groups = groupings(OutputBit::C1, Mode::Subtraction);
    let single = &groups[4];
    assert_eq!(single.cells().collect::<Vec<_>>(), [(0, 1)]);
    assert_eq!(single.sides(0, 1), Sides::ALL);
}

#[test]
fn test_stroke_color_is_opaque_fill() {
    let group = &groupings(OutputBit::C0, Mode::Addition)[0];
    assert_eq!(group.stroke_color(), "rgb(59, 130, 246)");
}

#[test]
fn test_groups_cover_only_set_cells() {
    // Every covered cell holds a 1 on the projected map half
    use crate::kmap::KMap;
    use crate::table::TruthTable;

    let table = TruthTable::generate();
    for output in OutputBit::ALL {
        let kmap = KMap::project(&table, output);
        for mode in Mode::ALL {
            let half = kmap.half(mode);
            for group in groupings(output, mode) {
                for (row, col) in group.cells() {
                    assert!(
                        half.cell(row, col),
                        "{} {} group {:?} covers a 0 at ({}, {})",
                        output,
                        mode,
                        group.label,
                        row,
                        col,
                    );
                }
            }
        }
    }
}
