//! Central editor state - single source of truth.
//!
//! All editor data flows through `EditorState`. Hierarchy modifications
//! go through the command system for undo/redo support.

use std::path::PathBuf;
use std::time::Instant;

use crate::assets::{AssetBrowser, AssetDatabase};
use crate::commands::{
    Command, CommandError, MoveDownSiblingCommand, MoveDownToParentSiblingCommand,
    MoveUpSiblingCommand, MoveUpToParentSiblingCommand, ReparentCommand,
};
use crate::project::{reveal, scaffold, ProjectLayout};
use super::{
    Console, NodeId, RecentFiles, SceneTree, SelectionManager, SelectionMode, UndoHistory,
};

/// Central editor state.
pub struct EditorState {
    // Scene data
    pub tree: SceneTree,

    // Selection
    pub selection: SelectionManager,

    // History
    pub history: UndoHistory,

    // Project layout
    pub layout: ProjectLayout,

    // Scene file
    pub scene_path: Option<PathBuf>,
    pub scene_modified: bool,

    // Recent files
    pub recent_files: RecentFiles,

    // Console
    pub console: Console,

    // Asset database and browser
    pub asset_database: AssetDatabase,
    pub asset_browser: AssetBrowser,

    // Status message
    pub status_message: String,
    pub status_time: Instant,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_layout(ProjectLayout::default())
    }

    pub fn with_layout(layout: ProjectLayout) -> Self {
        let asset_browser = AssetBrowser::at(layout.root().to_path_buf());

        Self {
            tree: SceneTree::new(),
            selection: SelectionManager::new(),
            history: UndoHistory::new(),
            layout,
            scene_path: None,
            scene_modified: false,
            recent_files: RecentFiles::new(),
            console: Console::default(),
            asset_database: AssetDatabase::new(),
            asset_browser,
            status_message: "Ready".to_string(),
            status_time: Instant::now(),
        }
    }

    /// Set the status bar message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_time = Instant::now();
    }

    /// Remove the selected nodes and their subtrees.
    pub fn despawn_selected(&mut self) {
        let selected: Vec<NodeId> = self.selection.selected().to_vec();
        for id in selected {
            if let Some(node) = self.tree.despawn(id) {
                self.console.info(format!("Deleted node: {}", node.name));
                self.scene_modified = true;
            }
        }

        // Selected descendants of a removed node are gone too
        let dead: Vec<NodeId> = self
            .selection
            .selected()
            .iter()
            .copied()
            .filter(|&id| self.tree.get(id).is_none())
            .collect();
        for id in dead {
            self.selection.remove_node(id);
        }
    }

    /// Create a new empty scene.
    pub fn new_scene(&mut self) {
        self.tree.clear();
        self.selection.clear();
        self.history.clear();
        self.scene_path = None;
        self.scene_modified = false;

        self.console.info("New scene created");
        self.set_status("New scene created");
    }

    /// Check if the scene has been modified.
    pub fn is_modified(&self) -> bool {
        self.scene_modified || self.history.is_dirty()
    }

    /// Mark the scene as saved.
    pub fn mark_saved(&mut self) {
        self.scene_modified = false;
        self.history.mark_saved();
    }

    // ========================================================================
    // Command System Integration
    // ========================================================================

    /// Execute a command against the scene tree and record it for undo.
    ///
    /// Returns whether the tree changed. Boundary refusals are part of
    /// normal hierarchy navigation and produce no console output.
    pub fn execute_command(&mut self, mut cmd: Box<dyn Command>) -> bool {
        match cmd.execute(&mut self.tree) {
            Ok(()) => {
                self.history.push(cmd);
                self.scene_modified = true;
                true
            }
            Err(CommandError::HierarchyBoundary) => false,
            Err(e) => {
                self.console.error(format!("Command failed: {}", e));
                false
            }
        }
    }

    /// Undo the last command.
    pub fn undo(&mut self) -> bool {
        if let Some(mut cmd) = self.history.pop_undo() {
            let desc = cmd.description().to_string();
            match cmd.undo(&mut self.tree) {
                Ok(()) => {
                    self.history.push_to_redo(cmd);
                    self.console.info(format!("Undo: {}", desc));
                    self.set_status(format!("Undo: {}", desc));
                    true
                }
                Err(e) => {
                    self.history.push_to_undo(cmd);
                    self.console.error(format!("Undo failed: {}", e));
                    false
                }
            }
        } else {
            self.set_status("Nothing to undo");
            false
        }
    }

    /// Redo the last undone command.
    pub fn redo(&mut self) -> bool {
        if let Some(mut cmd) = self.history.pop_redo() {
            let desc = cmd.description().to_string();
            match cmd.execute(&mut self.tree) {
                Ok(()) => {
                    self.history.push_to_undo(cmd);
                    self.console.info(format!("Redo: {}", desc));
                    self.set_status(format!("Redo: {}", desc));
                    true
                }
                Err(e) => {
                    self.history.push_to_redo(cmd);
                    self.console.error(format!("Redo failed: {}", e));
                    false
                }
            }
        } else {
            self.set_status("Nothing to redo");
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    // ========================================================================
    // Hierarchy Commands
    // ========================================================================

    /// Swap the selected node with its preceding sibling.
    pub fn move_selected_up_sibling(&mut self) -> bool {
        let Some(id) = self.selection.primary() else {
            return false;
        };
        self.execute_command(Box::new(MoveUpSiblingCommand::new(id)))
    }

    /// Swap the selected node with its next sibling.
    pub fn move_selected_down_sibling(&mut self) -> bool {
        let Some(id) = self.selection.primary() else {
            return false;
        };
        self.execute_command(Box::new(MoveDownSiblingCommand::new(id)))
    }

    /// Move the selected node up across the parent boundary.
    pub fn move_selected_up_to_parent_sibling(&mut self) -> bool {
        let Some(id) = self.selection.primary() else {
            return false;
        };
        let moved = self.execute_command(Box::new(MoveUpToParentSiblingCommand::new(id)));
        if moved {
            self.selection.select(id, SelectionMode::Replace);
        }
        moved
    }

    /// Move the selected node down across the parent boundary.
    pub fn move_selected_down_to_parent_sibling(&mut self) -> bool {
        let Some(id) = self.selection.primary() else {
            return false;
        };
        let moved = self.execute_command(Box::new(MoveDownToParentSiblingCommand::new(id)));
        if moved {
            self.selection.select(id, SelectionMode::Replace);
        }
        moved
    }

    /// Reparent the selected node (hierarchy drag-drop).
    pub fn reparent_selected(&mut self, new_parent: Option<NodeId>) -> bool {
        let Some(id) = self.selection.primary() else {
            return false;
        };
        self.execute_command(Box::new(ReparentCommand::new(id, new_parent)))
    }

    // ========================================================================
    // Project Operations
    // ========================================================================

    /// Create the standard project folders, save the default scene, and
    /// re-index the asset database.
    pub fn make_project_folders(&mut self) -> Result<(), String> {
        let missing = scaffold::missing_folders(&self.layout);
        let created = scaffold::create_folders(&missing).map_err(|e| e.to_string())?;

        let scene_path = self.layout.default_scene_path();
        self.save_scene(scene_path)?;

        self.init_asset_database();

        self.console.info(format!(
            "Project folders ready: {} created, {} already present",
            created,
            self.layout.standard_folders().len() - created
        ));
        self.set_status("Project folders ready");
        Ok(())
    }

    /// Open the OS file browser at the selected asset, or at the project
    /// root when nothing is selected.
    pub fn reveal_in_file_browser(&mut self) -> Result<(), String> {
        let target = reveal::reveal_target(self.asset_browser.selected_entry(), self.layout.root());
        reveal::open_in_file_browser(&target).map_err(|e| e.to_string())?;

        self.console.info(format!("Revealed {}", target.display()));
        Ok(())
    }

    /// (Re-)index the asset database over the project root.
    pub fn init_asset_database(&mut self) {
        self.asset_database.add_root(self.layout.root().to_path_buf());
        self.asset_database.refresh();
        self.asset_browser.refresh();

        self.console.info(format!(
            "Asset database refreshed: {} assets indexed",
            self.asset_database.count()
        ));
    }

    // ========================================================================
    // Scene Save/Load
    // ========================================================================

    /// Save the current scene to a file.
    pub fn save_scene(&mut self, path: PathBuf) -> Result<(), String> {
        use crate::scene::SceneSerializer;

        SceneSerializer::save(self, &path).map_err(|e| e.to_string())?;

        self.scene_path = Some(path.clone());
        self.mark_saved();
        self.recent_files.add(path.clone());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "scene".to_string());

        self.console.info(format!("Saved scene: {}", name));
        self.set_status(format!("Saved: {}", name));

        Ok(())
    }

    /// Load a scene from a file.
    pub fn load_scene(&mut self, path: PathBuf) -> Result<(), String> {
        use crate::scene::SceneSerializer;

        SceneSerializer::load(self, &path).map_err(|e| e.to_string())?;

        self.scene_path = Some(path.clone());
        self.scene_modified = false;
        self.recent_files.add(path.clone());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "scene".to_string());

        self.console
            .info(format!("Loaded scene: {} ({} nodes)", name, self.tree.len()));
        self.set_status(format!("Loaded: {}", name));

        Ok(())
    }

    /// Save to the current path; `Ok(false)` means no path is set yet.
    pub fn save_scene_current(&mut self) -> Result<bool, String> {
        if let Some(path) = self.scene_path.clone() {
            self.save_scene(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
