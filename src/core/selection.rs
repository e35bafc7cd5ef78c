//! Selection management with multi-select support.
//!
//! Click replaces the selection; Shift adds, Ctrl removes, and
//! Ctrl+Shift toggles. The primary node is the last one selected and is
//! the one hierarchy commands act on.

use super::NodeId;

/// Selection mode based on modifier keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Replace current selection (normal click)
    #[default]
    Replace,
    /// Add to current selection (Shift+click)
    Add,
    /// Remove from current selection (Ctrl+click)
    Remove,
    /// Toggle selection state (Ctrl+Shift+click)
    Toggle,
}

impl SelectionMode {
    /// Determine selection mode from modifier keys.
    pub fn from_modifiers(shift: bool, ctrl: bool) -> Self {
        match (shift, ctrl) {
            (true, true) => Self::Toggle,
            (true, false) => Self::Add,
            (false, true) => Self::Remove,
            (false, false) => Self::Replace,
        }
    }
}

/// Manages node selection with multi-select support.
#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    /// Currently selected nodes (in selection order)
    selected: Vec<NodeId>,
    /// Primary selected node (last selected)
    primary: Option<NodeId>,
    /// Whether selection has changed since last frame
    dirty: bool,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary (last selected) node.
    pub fn primary(&self) -> Option<NodeId> {
        self.primary
    }

    /// Get all selected nodes.
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_primary(&self, id: NodeId) -> bool {
        self.primary == Some(id)
    }

    /// Check and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// Select a node with the given mode.
    pub fn select(&mut self, id: NodeId, mode: SelectionMode) {
        match mode {
            SelectionMode::Replace => {
                self.selected.clear();
                self.selected.push(id);
                self.primary = Some(id);
            }
            SelectionMode::Add => {
                if !self.selected.contains(&id) {
                    self.selected.push(id);
                }
                self.primary = Some(id);
            }
            SelectionMode::Remove => self.deselect(id),
            SelectionMode::Toggle => {
                if self.selected.contains(&id) {
                    self.deselect(id);
                } else {
                    self.selected.push(id);
                    self.primary = Some(id);
                }
            }
        }
        self.dirty = true;
    }

    fn deselect(&mut self, id: NodeId) {
        self.selected.retain(|&n| n != id);
        if self.primary == Some(id) {
            self.primary = self.selected.last().copied();
        }
    }

    /// Select multiple nodes (replaces current selection).
    pub fn select_multiple(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.selected.clear();
        self.selected.extend(ids);
        self.primary = self.selected.last().copied();
        self.dirty = true;
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.primary = None;
            self.dirty = true;
        }
    }

    /// Drop a node from the selection (e.g. when it is despawned).
    pub fn remove_node(&mut self, id: NodeId) {
        if self.selected.contains(&id) {
            self.deselect(id);
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_replace() {
        let mut sel = SelectionManager::new();
        assert!(!sel.take_dirty());

        sel.select(NodeId(1), SelectionMode::Replace);
        sel.select(NodeId(2), SelectionMode::Replace);

        assert_eq!(sel.count(), 1);
        assert!(sel.is_selected(NodeId(2)));
        assert!(!sel.is_selected(NodeId(1)));
        assert!(sel.take_dirty());
        assert!(!sel.take_dirty());
    }

    #[test]
    fn test_selection_add() {
        let mut sel = SelectionManager::new();
        sel.select(NodeId(1), SelectionMode::Replace);
        sel.select(NodeId(2), SelectionMode::Add);

        assert_eq!(sel.count(), 2);
        assert_eq!(sel.primary(), Some(NodeId(2)));
    }

    #[test]
    fn test_selection_toggle() {
        let mut sel = SelectionManager::new();
        sel.select(NodeId(1), SelectionMode::Replace);
        sel.select(NodeId(1), SelectionMode::Toggle);

        assert!(sel.is_empty());
        assert_eq!(sel.primary(), None);
    }

    #[test]
    fn test_primary_falls_back_on_remove() {
        let mut sel = SelectionManager::new();
        sel.select(NodeId(1), SelectionMode::Replace);
        sel.select(NodeId(2), SelectionMode::Add);
        sel.remove_node(NodeId(2));

        assert_eq!(sel.primary(), Some(NodeId(1)));
    }
}
