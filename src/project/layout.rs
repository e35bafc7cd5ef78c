//! Project layout: where the standard folders and the default scene live.
//!
//! Persisted as TOML so a project can rename its folders without
//! rebuilding the editor.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Folder names and fixed paths for a project.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Project root directory
    pub root: PathBuf,

    /// Folder for editor extension scripts
    #[serde(default = "default_editor_folder")]
    pub editor_folder: String,

    /// Folder for scene files
    #[serde(default = "default_scenes_folder")]
    pub scenes_folder: String,

    /// Folder for gameplay scripts
    #[serde(default = "default_scripts_folder")]
    pub scripts_folder: String,

    /// File name of the default scene, stored in the scenes folder
    #[serde(default = "default_scene_file")]
    pub default_scene_file: String,
}

fn default_editor_folder() -> String {
    "Editor".to_string()
}

fn default_scenes_folder() -> String {
    "Scenes".to_string()
}

fn default_scripts_folder() -> String {
    "Scripts".to_string()
}

fn default_scene_file() -> String {
    "Main.scene.toml".to_string()
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl ProjectLayout {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            editor_folder: default_editor_folder(),
            scenes_folder: default_scenes_folder(),
            scripts_folder: default_scripts_folder(),
            default_scene_file: default_scene_file(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn editor_dir(&self) -> PathBuf {
        self.root.join(&self.editor_folder)
    }

    pub fn scenes_dir(&self) -> PathBuf {
        self.root.join(&self.scenes_folder)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(&self.scripts_folder)
    }

    /// The standard folders every project carries.
    pub fn standard_folders(&self) -> Vec<PathBuf> {
        vec![self.editor_dir(), self.scenes_dir(), self.scripts_dir()]
    }

    /// The fixed path the default scene is saved to.
    pub fn default_scene_path(&self) -> PathBuf {
        self.scenes_dir().join(&self.default_scene_file)
    }

    /// Load a layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LayoutError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| LayoutError::Parse(e.to_string()))
    }

    /// Save the layout to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), LayoutError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LayoutError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| LayoutError::Io(e.to_string()))?;
        log::info!("Saved project layout to {}", path.display());
        Ok(())
    }

    /// Default location for the persisted layout file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("edkit");
            p.push("project.toml");
            p
        })
    }
}

/// Layout load/save errors.
#[derive(Clone, Debug)]
pub enum LayoutError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io(e) => write!(f, "IO error: {}", e),
            LayoutError::Parse(e) => write!(f, "Parse error: {}", e),
            LayoutError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_paths() {
        let layout = ProjectLayout::new(PathBuf::from("/proj"));
        assert_eq!(layout.editor_dir(), PathBuf::from("/proj/Editor"));
        assert_eq!(
            layout.default_scene_path(),
            PathBuf::from("/proj/Scenes/Main.scene.toml")
        );
        assert_eq!(layout.standard_folders().len(), 3);
    }

    #[test]
    fn test_layout_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.toml");

        let mut layout = ProjectLayout::new(PathBuf::from("/proj"));
        layout.scenes_folder = "Levels".to_string();
        layout.save(&path).unwrap();

        let loaded = ProjectLayout::load(&path).unwrap();
        assert_eq!(loaded.scenes_dir(), PathBuf::from("/proj/Levels"));
        assert_eq!(loaded.editor_folder, "Editor");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.toml");
        std::fs::write(&path, "root = \"/proj\"\n").unwrap();

        let loaded = ProjectLayout::load(&path).unwrap();
        assert_eq!(loaded.default_scene_file, "Main.scene.toml");
        assert_eq!(loaded.scripts_folder, "Scripts");
    }
}
