//! Project-level operations: layout, folder scaffolding, and revealing
//! paths in the OS file browser.

mod layout;
pub mod scaffold;
pub mod reveal;

pub use layout::{ProjectLayout, LayoutError};
