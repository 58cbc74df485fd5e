//! yew components for the browser front end
//!
//! Each component is a pure function of the core data plus its own local
//! state; all logic-core computation goes through the library types.

mod app;
mod circuit_tab;
mod header;
mod kmap_view;
mod kmaps_tab;
mod tab_navigation;
mod truth_table;

pub use app::App;
pub use circuit_tab::CircuitTab;
pub use header::Header;
pub use kmap_view::KmapPanel;
pub use kmaps_tab::KmapsTab;
pub use tab_navigation::TabNavigation;
pub use truth_table::TruthTableView;
