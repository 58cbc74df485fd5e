//! Tab and K-map panel state

use crate::circuit::OutputBit;

/// The three mutually exclusive view panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Truth,
    Kmap,
    Circuit,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Truth, Tab::Kmap, Tab::Circuit];

    /// Full tab label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Truth => "Truth Table",
            Tab::Kmap => "K-Maps",
            Tab::Circuit => "Logic Circuit",
        }
    }

    /// Abbreviated label for narrow layouts
    pub fn short_label(&self) -> &'static str {
        match self {
            Tab::Truth => "Table",
            Tab::Kmap => "K-Maps",
            Tab::Circuit => "Circuit",
        }
    }
}

/// Expansion state of the three K-map panels
///
/// At most one panel is expanded. Clicking the expanded panel's header
/// collapses it; clicking another header while one is expanded switches
/// straight to the new panel, with no intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KmapPanels {
    expanded: Option<OutputBit>,
}

impl KmapPanels {
    pub fn new() -> Self {
        KmapPanels::default()
    }

    /// Header click on one panel
    pub fn toggle(&mut self, output: OutputBit) {
        self.expanded = if self.expanded == Some(output) {
            None
        } else {
            Some(output)
        };
    }

    /// The currently expanded panel, if any
    pub fn expanded(&self) -> Option<OutputBit> {
        self.expanded
    }

    pub fn is_expanded(&self, output: OutputBit) -> bool {
        self.expanded == Some(output)
    }

    /// Whether a panel is hidden because a different one is expanded
    pub fn is_hidden(&self, output: OutputBit) -> bool {
        self.expanded.is_some_and(|expanded| expanded != output)
    }
}
