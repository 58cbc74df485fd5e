//! Grouping geometry for the K-map views
//!
//! Each grouping covers a rectangle of cells on one 4×4 mode half, given in
//! half-local *logical* coordinates (the Gray reordering happens at render
//! time). Groups that wrap around a map edge carry per-cell side hints so
//! the outlines of the two fragments appear merged: a suppressed side is the
//! edge the group continues across.

use crate::circuit::{Mode, OutputBit};

/// Which outline sides to draw for one cell of a grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Sides {
    /// All four sides drawn (the default for cells without a hint)
    pub const ALL: Sides = Sides::new(true, true, true, true);

    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Sides {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Side hint for one cell, keyed by half-local `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSides {
    pub row: usize,
    pub col: usize,
    pub sides: Sides,
}

/// One covering rectangle on a mode half
///
/// `rows` × `cols` is the covered cell set. `color` is the translucent fill
/// used behind the cells and in the legend; the outline stroke is the same
/// color at full opacity ([`Grouping::stroke_color`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    pub rows: &'static [usize],
    pub cols: &'static [usize],
    pub color: &'static str,
    pub label: &'static str,
    pub borders: &'static [CellSides],
}

impl Grouping {
    /// Every covered cell, row-major over the `rows` × `cols` product
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .flat_map(move |&row| self.cols.iter().map(move |&col| (row, col)))
    }

    /// Outline sides for one covered cell
    pub fn sides(&self, row: usize, col: usize) -> Sides {
        self.borders
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
            .map(|cell| cell.sides)
            .unwrap_or(Sides::ALL)
    }

    /// The fill color at full opacity, for outline strokes
    pub fn stroke_color(&self) -> String {
        self.color.replacen("rgba", "rgb", 1).replace(", 0.25)", ")")
    }
}

/// The groupings for one output bit in one mode
///
/// `C0` has the same two groups in both modes; `C2` has three per mode and
/// `C1` six per mode. The geometry, colors, and labels are reproduced from
/// the authored covering exactly, including the label punctuation differences
/// between the two `C1` modes.
pub fn groupings(output: OutputBit, mode: Mode) -> &'static [Grouping] {
    match (output, mode) {
        (OutputBit::C0, _) => &C0_GROUPS,
        (OutputBit::C2, Mode::Addition) => &C2_ADD_GROUPS,
        (OutputBit::C2, Mode::Subtraction) => &C2_SUB_GROUPS,
        (OutputBit::C1, Mode::Addition) => &C1_ADD_GROUPS,
        (OutputBit::C1, Mode::Subtraction) => &C1_SUB_GROUPS,
    }
}

const C0_GROUPS: [Grouping; 2] = [
    Grouping {
        rows: &[1, 3],
        cols: &[0, 2],
        color: "rgba(59, 130, 246, 0.25)",
        label: "A̅0+B0",
        // Columns 0 and 2 sit on opposite visual edges; the open sides face
        // the wrap.
        borders: &[
            CellSides {
                row: 1,
                col: 0,
                sides: Sides::new(true, true, true, false),
            },
            CellSides {
                row: 1,
                col: 2,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 3,
                col: 2,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 3,
                col: 0,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[2, 0],
        cols: &[1, 3],
        color: "rgba(38, 255, 0, 0.25)",
        label: "A0+B̅0",
        borders: &[
            CellSides {
                row: 2,
                col: 1,
                sides: Sides::new(true, true, false, true),
            },
            CellSides {
                row: 2,
                col: 3,
                sides: Sides::new(true, true, false, true),
            },
            CellSides {
                row: 0,
                col: 3,
                sides: Sides::new(false, true, true, true),
            },
            CellSides {
                row: 0,
                col: 1,
                sides: Sides::new(false, true, true, true),
            },
        ],
    },
];

const C2_ADD_GROUPS: [Grouping; 3] = [
    Grouping {
        rows: &[2, 3],
        cols: &[2, 3],
        color: "rgba(59, 130, 246, 0.25)",
        label: "A1B1",
        borders: &[
            CellSides {
                row: 3,
                col: 2,
                sides: Sides::new(true, true, false, false),
            },
            CellSides {
                row: 3,
                col: 3,
                sides: Sides::new(true, false, false, true),
            },
            CellSides {
                row: 2,
                col: 2,
                sides: Sides::new(false, true, true, false),
            },
            CellSides {
                row: 2,
                col: 3,
                sides: Sides::new(false, false, true, true),
            },
        ],
    },
    Grouping {
        rows: &[3],
        cols: &[1, 3],
        color: "rgba(38, 255, 0, 0.25)",
        label: "A1A0B0",
        borders: &[
            CellSides {
                row: 3,
                col: 1,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 3,
                col: 3,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[1, 3],
        cols: &[3],
        color: "rgba(255, 0, 0, 0.25)",
        label: "A0B1B0",
        borders: &[
            CellSides {
                row: 1,
                col: 3,
                sides: Sides::new(true, true, false, true),
            },
            CellSides {
                row: 3,
                col: 3,
                sides: Sides::new(false, true, true, true),
            },
        ],
    },
];

const C2_SUB_GROUPS: [Grouping; 3] = [
    Grouping {
        rows: &[0, 1],
        cols: &[2, 3],
        color: "rgba(59, 130, 246, 0.25)",
        label: "A̅1B1",
        borders: &[
            CellSides {
                row: 0,
                col: 2,
                sides: Sides::new(true, true, false, false),
            },
            CellSides {
                row: 0,
                col: 3,
                sides: Sides::new(true, false, false, true),
            },
            CellSides {
                row: 1,
                col: 2,
                sides: Sides::new(false, true, true, false),
            },
            CellSides {
                row: 1,
                col: 3,
                sides: Sides::new(false, false, true, true),
            },
        ],
    },
    Grouping {
        rows: &[0],
        cols: &[1, 3],
        color: "rgba(38, 255, 0, 0.25)",
        label: "A̅1A̅0B0",
        borders: &[
            CellSides {
                row: 0,
                col: 1,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 0,
                col: 3,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[0, 2],
        cols: &[3],
        color: "rgba(255, 0, 0, 0.25)",
        label: "A̅0B1B0",
        borders: &[
            CellSides {
                row: 0,
                col: 3,
                sides: Sides::new(false, true, true, true),
            },
            CellSides {
                row: 2,
                col: 3,
                sides: Sides::new(true, true, false, true),
            },
        ],
    },
];

const C1_ADD_GROUPS: [Grouping; 6] = [
    Grouping {
        rows: &[2, 3],
        cols: &[0],
        color: "rgba(0, 98, 255, 0.25)",
        label: "A1B̅1B̅0",
        // Rows 2 and 3 are visual neighbours after the Gray reorder; the
        // suppressed sides face each other.
        borders: &[
            CellSides {
                row: 2,
                col: 0,
                sides: Sides::new(false, true, true, true),
            },
            CellSides {
                row: 3,
                col: 0,
                sides: Sides::new(true, true, false, true),
            },
        ],
    },
    Grouping {
        rows: &[2],
        cols: &[0, 1],
        color: "rgba(38, 255, 0, 0.25)",
        label: "A1A̅0B̅1",
        borders: &[
            CellSides {
                row: 2,
                col: 0,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 2,
                col: 1,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[0],
        cols: &[2, 3],
        color: "rgba(255, 0, 0, 0.25)",
        label: "A̅1A̅0B1",
        borders: &[
            CellSides {
                row: 0,
                col: 3,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 0,
                col: 2,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[0, 1],
        cols: &[2],
        color: "rgba(234, 0, 255, 0.25)",
        label: "A̅0B1B̅0",
        borders: &[
            CellSides {
                row: 0,
                col: 2,
                sides: Sides::new(true, true, false, true),
            },
            CellSides {
                row: 1,
                col: 2,
                sides: Sides::new(false, true, true, true),
            },
        ],
    },
    Grouping {
        rows: &[3],
        cols: &[3],
        color: "rgba(234, 255, 0, 0.25)",
        label: "A̅1A0B̅1B0",
        borders: &[],
    },
    Grouping {
        rows: &[1],
        cols: &[1],
        color: "rgba(0, 247, 255, 0.25)",
        label: "A1A0B1B0",
        borders: &[],
    },
];

const C1_SUB_GROUPS: [Grouping; 6] = [
    Grouping {
        rows: &[2, 3],
        cols: &[0],
        color: "rgba(0, 98, 255, 0.25)",
        label: "A1·B̅1·B̅0",
        borders: &[
            CellSides {
                row: 2,
                col: 0,
                sides: Sides::new(false, true, true, true),
            },
            CellSides {
                row: 3,
                col: 0,
                sides: Sides::new(true, true, false, true),
            },
        ],
    },
    Grouping {
        rows: &[3],
        cols: &[0, 1],
        color: "rgba(38, 255, 0, 0.25)",
        label: "A1·A0·B̅1",
        borders: &[
            CellSides {
                row: 3,
                col: 0,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 3,
                col: 1,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[1],
        cols: &[2, 3],
        color: "rgba(255, 0, 0, 0.25)",
        label: "A̅1·A0·B1",
        borders: &[
            CellSides {
                row: 1,
                col: 3,
                sides: Sides::new(true, false, true, true),
            },
            CellSides {
                row: 1,
                col: 2,
                sides: Sides::new(true, true, true, false),
            },
        ],
    },
    Grouping {
        rows: &[0, 1],
        cols: &[2],
        color: "rgba(234, 0, 255, 0.25)",
        label: "A̅1·B1·B̅0",
        borders: &[
            CellSides {
                row: 0,
                col: 2,
                sides: Sides::new(true, true, false, true),
            },
            CellSides {
                row: 1,
                col: 2,
                sides: Sides::new(false, true, true, true),
            },
        ],
    },
    Grouping {
        rows: &[0],
        cols: &[1],
        color: "rgba(234, 255, 0, 0.25)",
        label: "A̅1·A̅0·B̅1·B0",
        borders: &[],
    },
    Grouping {
        rows: &[2],
        cols: &[3],
        color: "rgba(0, 247, 255, 0.25)",
        label: "A1·A̅0·B1·B0",
        borders: &[],
    },
];
