//! Undo/Redo history with command pattern and transaction support.
//!
//! All hierarchy modifications go through the history system to enable
//! undo/redo. Commands can be grouped into transactions for atomic
//! multi-step operations.

use crate::commands::{Command, CommandResult};
use super::SceneGraph;

/// A group of commands executed as a single undoable unit.
pub struct Transaction {
    pub name: String,
    pub commands: Vec<Box<dyn Command>>,
}

impl Transaction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: Box<dyn Command>) {
        self.commands.push(cmd);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Undo/redo history stack.
pub struct UndoHistory {
    /// Commands that can be undone
    undo_stack: Vec<Box<dyn Command>>,
    /// Commands that can be redone
    redo_stack: Vec<Box<dyn Command>>,
    /// Maximum history size
    max_size: usize,
    /// Current open transaction
    current_transaction: Option<Transaction>,
    /// Whether history has been modified since last save
    dirty: bool,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    /// Default maximum history size.
    pub const DEFAULT_MAX_SIZE: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
            current_transaction: None,
            dirty: false,
        }
    }

    /// Check if there are commands to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the description of the next undo command.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Get the description of the next redo command.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark as saved (clears dirty flag).
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Begin a new transaction.
    /// Commands added during a transaction are grouped as one undo unit.
    pub fn begin_transaction(&mut self, name: impl Into<String>) {
        if self.current_transaction.is_some() {
            log::warn!("Beginning transaction while one is already open");
        }
        self.current_transaction = Some(Transaction::new(name));
    }

    /// Commit the current transaction.
    pub fn commit_transaction(&mut self) {
        if let Some(transaction) = self.current_transaction.take() {
            if !transaction.is_empty() {
                self.push_command(Box::new(TransactionCommand(transaction)));
            }
        }
    }

    /// Rollback the current transaction.
    pub fn rollback_transaction(&mut self) {
        self.current_transaction = None;
    }

    /// Check if a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.current_transaction.is_some()
    }

    /// Push a command that has already been executed.
    pub fn push(&mut self, cmd: Box<dyn Command>) {
        if let Some(ref mut transaction) = self.current_transaction {
            transaction.push(cmd);
        } else {
            self.push_command(cmd);
        }
    }

    fn push_command(&mut self, cmd: Box<dyn Command>) {
        // Merged commands replace their predecessor
        if let Some(last) = self.undo_stack.last() {
            if last.can_merge(cmd.as_ref()) {
                self.undo_stack.pop();
            }
        }

        self.undo_stack.push(cmd);
        self.redo_stack.clear(); // Clear redo on new action
        self.dirty = true;

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Pop a command from the undo stack.
    pub fn pop_undo(&mut self) -> Option<Box<dyn Command>> {
        let cmd = self.undo_stack.pop();
        if cmd.is_some() {
            self.dirty = true;
        }
        cmd
    }

    /// Pop a command from the redo stack.
    pub fn pop_redo(&mut self) -> Option<Box<dyn Command>> {
        let cmd = self.redo_stack.pop();
        if cmd.is_some() {
            self.dirty = true;
        }
        cmd
    }

    /// Push a command to the undo stack (for redo completion).
    pub fn push_to_undo(&mut self, cmd: Box<dyn Command>) {
        self.undo_stack.push(cmd);
        self.dirty = true;
    }

    /// Push a command to the redo stack (for undo completion).
    pub fn push_to_redo(&mut self, cmd: Box<dyn Command>) {
        self.redo_stack.push(cmd);
        self.dirty = true;
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_transaction = None;
        self.dirty = false;
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

/// A command that wraps a transaction.
struct TransactionCommand(Transaction);

impl Command for TransactionCommand {
    fn description(&self) -> &str {
        &self.0.name
    }

    fn execute(&mut self, graph: &mut dyn SceneGraph) -> CommandResult {
        for cmd in &mut self.0.commands {
            cmd.execute(graph)?;
        }
        Ok(())
    }

    fn undo(&mut self, graph: &mut dyn SceneGraph) -> CommandResult {
        // Undo in reverse order
        for cmd in self.0.commands.iter_mut().rev() {
            cmd.undo(graph)?;
        }
        Ok(())
    }

    fn can_merge(&self, _other: &dyn Command) -> bool {
        false // Transactions cannot merge
    }
}
