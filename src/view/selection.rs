//! Truth-table selection state

use crate::circuit::OutputBit;
use crate::table::TruthRow;
use std::collections::BTreeSet;

/// A set with click-to-toggle membership
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToggleSet<T: Ord>(BTreeSet<T>);

impl<T: Ord> ToggleSet<T> {
    pub fn new() -> Self {
        ToggleSet(BTreeSet::new())
    }

    /// Insert the value if absent, remove it if present
    pub fn toggle(&mut self, value: T) {
        if !self.0.remove(&value) {
            self.0.insert(value);
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

/// Why a truth-table row is drawn highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    /// The row itself was clicked
    Selected,
    /// The highlighted output column reads 1 on this row
    OutputMatch,
}

/// Inspection state of the truth-table view
///
/// Holds the clicked row set and the optional highlighted output column.
/// Purely local to the view; nothing else reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected_rows: ToggleSet<usize>,
    highlighted_output: Option<OutputBit>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Row click: toggle the row in and out of the selection
    pub fn toggle_row(&mut self, index: usize) {
        self.selected_rows.toggle(index);
    }

    /// Output-header click: highlight that column, or clear the highlight
    /// when the active column is clicked again
    pub fn click_output(&mut self, output: OutputBit) {
        self.highlighted_output = if self.highlighted_output == Some(output) {
            None
        } else {
            Some(output)
        };
    }

    pub fn highlighted_output(&self) -> Option<OutputBit> {
        self.highlighted_output
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selected_rows.contains(&index)
    }

    pub fn selected_rows(&self) -> impl Iterator<Item = &usize> {
        self.selected_rows.iter()
    }

    /// How a row should be drawn, if highlighted at all
    ///
    /// A clicked row wins over an output-column match.
    pub fn highlight(&self, index: usize, row: &TruthRow) -> Option<RowHighlight> {
        if self.is_row_selected(index) {
            Some(RowHighlight::Selected)
        } else if self
            .highlighted_output
            .is_some_and(|output| row.outputs.bit(output))
        {
            Some(RowHighlight::OutputMatch)
        } else {
            None
        }
    }
}
