//! Core editor types and state management.
//!
//! This module contains the central `EditorState` and supporting types
//! that form the foundation of the toolkit.

pub mod editor_state;
mod scene_graph;
mod scene_tree;
mod selection;
mod history;
mod console;

pub use editor_state::EditorState;
pub use scene_graph::{SceneGraph, Transform};
pub use scene_tree::{SceneNode, SceneTree};
pub use selection::{SelectionManager, SelectionMode};
pub use history::{UndoHistory, Transaction};
pub use console::{Console, LogLevel, LogEntry};

use std::path::PathBuf;

/// Node identifier used throughout the toolkit.
///
/// Host integrations map this to their own entity handle; the bundled
/// [`SceneTree`] hands them out sequentially.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Recent files list with LRU behavior.
#[derive(Clone, Debug, Default)]
pub struct RecentFiles {
    files: std::collections::VecDeque<PathBuf>,
    max_entries: usize,
}

impl RecentFiles {
    const DEFAULT_MAX: usize = 10;

    pub fn new() -> Self {
        Self {
            files: std::collections::VecDeque::new(),
            max_entries: Self::DEFAULT_MAX,
        }
    }

    pub fn add(&mut self, path: PathBuf) {
        // Move to front if already present
        self.files.retain(|p| p != &path);
        self.files.push_front(path);
        while self.files.len() > self.max_entries {
            self.files.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
