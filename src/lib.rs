//! Edkit - headless scene-editor toolkit.
//!
//! A small collection of editor convenience commands for scene authoring:
//! reordering nodes among their siblings, walking them up and down the
//! hierarchy, scaffolding the standard project folders, and revealing
//! assets in the host OS file browser.
//!
//! ## Features
//!
//! - **Scene Tree**: In-memory hierarchy with ordered children and roots
//! - **Hierarchy Commands**: Sibling reordering and cross-parent moves
//! - **Undo/Redo**: Full command history with transaction support
//! - **Selection**: Multi-select with modifier modes and a primary node
//! - **Asset Database**: File-based asset indexing with GUIDs and search
//! - **Project Scaffolding**: Standard folder creation and default scene
//! - **TOML Scenes**: Hierarchy-aware scene files (JSON accepted too)
//!
//! ## Architecture
//!
//! The toolkit follows a command-based architecture:
//!
//! ```text
//! Menu Action → Command → SceneGraph → EditorState bookkeeping
//! ```
//!
//! Commands are written against the [`SceneGraph`] abstraction rather than
//! a concrete engine, so the same logic drives the bundled [`SceneTree`]
//! and any host-provided hierarchy.

pub mod core;
pub mod commands;
pub mod assets;
pub mod project;
pub mod scene;
pub mod menu;

// Re-export commonly used types
pub use crate::core::{
    EditorState,
    NodeId,
    SceneGraph,
    SceneNode,
    SceneTree,
    SelectionManager,
    SelectionMode,
    Transform,
    UndoHistory,
    Console,
    LogLevel,
    LogEntry,
};

pub use commands::{
    Command,
    CommandResult,
    CommandError,
};

pub use assets::{
    AssetDatabase,
    AssetBrowser,
    AssetEntry,
    AssetGuid,
    AssetType,
};

pub use project::ProjectLayout;

pub use menu::EditorAction;

/// Toolkit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toolkit name
pub const NAME: &str = "Edkit";
