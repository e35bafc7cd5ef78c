//! Command pattern implementation for undo/redo support.
//!
//! All hierarchy modifications that should be undoable must go through
//! the command system.

mod command;
mod hierarchy_commands;

pub use command::{Command, CommandResult, CommandError, NoopCommand};
pub use hierarchy_commands::{
    MoveUpSiblingCommand,
    MoveDownSiblingCommand,
    MoveUpToParentSiblingCommand,
    MoveDownToParentSiblingCommand,
    ReparentCommand,
};
