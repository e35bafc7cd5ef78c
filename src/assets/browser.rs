//! Asset browser: directory listing with filtering and selection.
//!
//! The browser's selected entry is the "current asset" that reveal-in-
//! file-browser acts on.

use std::path::PathBuf;
use std::time::SystemTime;

/// Type of asset based on file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetType {
    Scene,
    Mesh,
    Texture,
    Audio,
    Script,
    Unknown,
}

impl AssetType {
    /// Determine asset type from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            // Scene formats
            "toml" | "ron" => AssetType::Scene,

            // Mesh formats
            "obj" | "gltf" | "glb" | "fbx" | "dae" => AssetType::Mesh,

            // Texture formats
            "png" | "jpg" | "jpeg" | "bmp" | "tga" | "dds" | "hdr" | "exr" => AssetType::Texture,

            // Audio formats
            "wav" | "mp3" | "ogg" | "flac" => AssetType::Audio,

            // Script formats
            "lua" | "js" | "wasm" => AssetType::Script,

            _ => AssetType::Unknown,
        }
    }

    /// Determine asset type from filename (handles compound extensions).
    pub fn from_filename(filename: &str) -> Self {
        // Check for compound extensions first
        if filename.ends_with(".scene.json") || filename.ends_with(".scene.toml") {
            return AssetType::Scene;
        }

        // Fall back to simple extension
        if let Some(ext) = std::path::Path::new(filename).extension() {
            Self::from_extension(ext.to_str().unwrap_or(""))
        } else {
            AssetType::Unknown
        }
    }

    /// Get display name for this asset type.
    pub fn name(&self) -> &'static str {
        match self {
            AssetType::Scene => "Scene",
            AssetType::Mesh => "Mesh",
            AssetType::Texture => "Texture",
            AssetType::Audio => "Audio",
            AssetType::Script => "Script",
            AssetType::Unknown => "Unknown",
        }
    }
}

/// An asset file entry.
#[derive(Clone, Debug)]
pub struct AssetEntry {
    pub name: String,
    pub path: PathBuf,
    pub asset_type: AssetType,
    pub size_bytes: u64,
    pub modified: Option<SystemTime>,
    pub is_directory: bool,
}

impl AssetEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = std::fs::metadata(&path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();
        let is_directory = metadata.is_dir();

        let asset_type = if is_directory {
            AssetType::Unknown
        } else {
            AssetType::from_filename(&name)
        };

        Some(Self {
            name,
            path,
            asset_type,
            size_bytes: if is_directory { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
            is_directory,
        })
    }
}

/// Asset browser state.
#[derive(Debug)]
pub struct AssetBrowser {
    pub current_path: PathBuf,
    pub entries: Vec<AssetEntry>,
    pub selected_asset: Option<usize>,
    pub filter_text: String,

    // View options
    pub show_hidden: bool,
    pub show_directories: bool,
}

impl Default for AssetBrowser {
    fn default() -> Self {
        Self {
            current_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            entries: Vec::new(),
            selected_asset: None,
            filter_text: String::new(),
            show_hidden: false,
            show_directories: true,
        }
    }
}

impl AssetBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(path: PathBuf) -> Self {
        Self {
            current_path: path,
            ..Default::default()
        }
    }

    /// Refresh the file list for the current directory.
    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_asset = None;

        if let Ok(read_dir) = std::fs::read_dir(&self.current_path) {
            for entry in read_dir.flatten() {
                let path = entry.path();

                if !self.show_hidden {
                    if let Some(name) = path.file_name() {
                        if name.to_string_lossy().starts_with('.') {
                            continue;
                        }
                    }
                }

                if let Some(asset_entry) = AssetEntry::from_path(path) {
                    self.entries.push(asset_entry);
                }
            }
        }

        // Directories first, then by name
        self.entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
    }

    /// Navigate to a directory.
    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.current_path = path;
            self.refresh();
        }
    }

    /// Navigate to the parent directory.
    pub fn navigate_up(&mut self) {
        if let Some(parent) = self.current_path.parent() {
            self.navigate_to(parent.to_path_buf());
        }
    }

    /// Check if an entry should be shown based on current filters.
    pub fn should_show(&self, entry: &AssetEntry) -> bool {
        if entry.is_directory && !self.show_directories {
            return false;
        }

        self.filter_text.is_empty()
            || entry.name.to_lowercase().contains(&self.filter_text.to_lowercase())
    }

    /// Get filtered entries.
    pub fn filtered_entries(&self) -> impl Iterator<Item = (usize, &AssetEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.should_show(e))
    }

    /// Get the selected entry.
    pub fn selected_entry(&self) -> Option<&AssetEntry> {
        self.selected_asset.and_then(|idx| self.entries.get(idx))
    }

    /// Select an entry by index.
    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected_asset = Some(index);
        }
    }

    /// Select the entry with the given name, if present.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e.name == name) {
            Some(idx) => {
                self.selected_asset = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected_asset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_from_filename() {
        assert_eq!(AssetType::from_filename("main.scene.toml"), AssetType::Scene);
        assert_eq!(AssetType::from_filename("main.scene.json"), AssetType::Scene);
        assert_eq!(AssetType::from_filename("enemy.lua"), AssetType::Script);
        assert_eq!(AssetType::from_filename("rock.glb"), AssetType::Mesh);
        assert_eq!(AssetType::from_filename("README"), AssetType::Unknown);
    }

    #[test]
    fn test_refresh_lists_directories_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Scenes")).unwrap();
        std::fs::write(dir.path().join("a.lua"), "").unwrap();

        let mut browser = AssetBrowser::at(dir.path().to_path_buf());
        browser.refresh();

        assert_eq!(browser.entries.len(), 2);
        assert!(browser.entries[0].is_directory);
        assert!(browser.select_by_name("a.lua"));
        assert_eq!(browser.selected_entry().unwrap().asset_type, AssetType::Script);
    }
}
