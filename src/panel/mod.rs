//! Two-level inline menu: pick a program, then pick a pane or a window.

pub mod interrupt;
pub mod reducer;
pub mod render;
pub mod session;
pub mod state;

pub use session::{PanelExit, PanelSession};
pub use state::{NavigationState, PanelMode};
