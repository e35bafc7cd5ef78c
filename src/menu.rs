//! Bindable editor menu actions.
//!
//! One entry per menu command the host UI exposes. Hosts match their key
//! events against [`EditorAction::accelerator`] and hand the action to
//! [`dispatch`]; the returned flag feeds the host's command bookkeeping.

use crate::core::EditorState;

/// A menu command the host can bind to a keyboard shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorAction {
    MakeProjectFolders,
    RevealInFileBrowser,
    MoveNodeUpSibling,
    MoveNodeDownSibling,
    MoveNodeUpToParentSibling,
    MoveNodeDownToParentSibling,
}

impl EditorAction {
    pub fn all() -> &'static [EditorAction] {
        &[
            EditorAction::MakeProjectFolders,
            EditorAction::RevealInFileBrowser,
            EditorAction::MoveNodeUpSibling,
            EditorAction::MoveNodeDownSibling,
            EditorAction::MoveNodeUpToParentSibling,
            EditorAction::MoveNodeDownToParentSibling,
        ]
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            EditorAction::MakeProjectFolders => "Make Necessary Folders",
            EditorAction::RevealInFileBrowser => "Open In File Browser",
            EditorAction::MoveNodeUpSibling => "Move Node Up Between Siblings",
            EditorAction::MoveNodeDownSibling => "Move Node Down Between Siblings",
            EditorAction::MoveNodeUpToParentSibling => "Move Node Up To Parent Siblings",
            EditorAction::MoveNodeDownToParentSibling => "Move Node Down To Parent Siblings",
        }
    }

    /// Default accelerator, in the same notation the shortcut dialog
    /// shows.
    pub fn accelerator(&self) -> &'static str {
        match self {
            EditorAction::MakeProjectFolders => "Ctrl+Shift+R",
            EditorAction::RevealInFileBrowser => "Ctrl+Shift+F",
            EditorAction::MoveNodeUpSibling => "Alt+Ctrl+Up",
            EditorAction::MoveNodeDownSibling => "Alt+Ctrl+Down",
            EditorAction::MoveNodeUpToParentSibling => "Alt+Up",
            EditorAction::MoveNodeDownToParentSibling => "Alt+Down",
        }
    }

    /// Look an action up by its accelerator string.
    pub fn from_accelerator(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.accelerator() == key)
    }
}

/// Run a menu action against the editor state.
///
/// Returns whether the action did anything. Hierarchy moves report their
/// command-system result; project operations surface failures on the
/// console and return `false`.
pub fn dispatch(state: &mut EditorState, action: EditorAction) -> bool {
    match action {
        EditorAction::MakeProjectFolders => match state.make_project_folders() {
            Ok(()) => true,
            Err(e) => {
                state.console.error(format!("Make folders failed: {}", e));
                false
            }
        },
        EditorAction::RevealInFileBrowser => match state.reveal_in_file_browser() {
            Ok(()) => true,
            Err(e) => {
                state.console.error(format!("Reveal failed: {}", e));
                false
            }
        },
        EditorAction::MoveNodeUpSibling => state.move_selected_up_sibling(),
        EditorAction::MoveNodeDownSibling => state.move_selected_down_sibling(),
        EditorAction::MoveNodeUpToParentSibling => state.move_selected_up_to_parent_sibling(),
        EditorAction::MoveNodeDownToParentSibling => state.move_selected_down_to_parent_sibling(),
    }
}
