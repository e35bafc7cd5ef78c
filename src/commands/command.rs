//! Command trait and result types.

use crate::core::{NodeId, SceneGraph};

/// Result type for command execution.
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution.
#[derive(Clone, Debug)]
pub enum CommandError {
    /// Node not found in the hierarchy
    NodeNotFound(NodeId),
    /// The move ran into the edge of its sibling list or the root level.
    /// Expected during normal use; callers treat it as a quiet no-op.
    HierarchyBoundary,
    /// Invalid operation
    InvalidOperation(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NodeNotFound(id) => write!(f, "Node not found: {}", id),
            CommandError::HierarchyBoundary => write!(f, "Move blocked at hierarchy boundary"),
            CommandError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

/// A command that can be executed, undone, and redone.
///
/// Commands are the primary way to modify the scene hierarchy. They run
/// against the [`SceneGraph`] abstraction rather than a concrete tree,
/// and capture whatever they need for their inverse.
pub trait Command: Send + Sync {
    /// Human-readable description for the undo/redo menu.
    fn description(&self) -> &str;

    /// Execute the command against the hierarchy.
    fn execute(&mut self, graph: &mut dyn SceneGraph) -> CommandResult;

    /// Undo the command, restoring the previous hierarchy state.
    fn undo(&mut self, graph: &mut dyn SceneGraph) -> CommandResult;

    /// Check if this command can be merged with another.
    /// Merging combines consecutive similar commands into a single
    /// undoable action.
    fn can_merge(&self, _other: &dyn Command) -> bool {
        false
    }
}

/// A no-op command for testing.
pub struct NoopCommand;

impl Command for NoopCommand {
    fn description(&self) -> &str {
        "No Operation"
    }

    fn execute(&mut self, _graph: &mut dyn SceneGraph) -> CommandResult {
        Ok(())
    }

    fn undo(&mut self, _graph: &mut dyn SceneGraph) -> CommandResult {
        Ok(())
    }
}
