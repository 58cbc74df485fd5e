//! Front-end-independent view state
//!
//! Every interactive surface of the visualizer owns a small piece of local
//! state: which truth-table rows are picked out, which output column is
//! highlighted, which K-map panel is expanded, which tab is active, and the
//! zoom/pan state of the schematic image. None of it touches the logic core
//! and none of it is shared between views, so each piece is modeled here as
//! a plain owned value with explicit transition methods. Front ends (the
//! terminal binary, the yew components) hold these values and re-render from
//! them after every transition.

mod panels;
mod selection;
mod zoom;

pub use panels::{KmapPanels, Tab};
pub use selection::{RowHighlight, Selection, ToggleSet};
pub use zoom::{ClickOutcome, ZoomPan};
