//! Reveal paths in the OS file browser.

use std::path::{Path, PathBuf};

use crate::assets::AssetEntry;

/// Resolve the directory the file browser should open.
///
/// No selection targets the project root. A selected directory opens
/// itself; a selected file opens its containing directory.
pub fn reveal_target(selected: Option<&AssetEntry>, project_root: &Path) -> PathBuf {
    match selected {
        None => project_root.to_path_buf(),
        Some(entry) if entry.is_directory => entry.path.clone(),
        Some(entry) => entry
            .path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| project_root.to_path_buf()),
    }
}

/// Open the OS file browser at `path`.
///
/// The browser process is spawned and not waited on.
pub fn open_in_file_browser(path: &Path) -> std::io::Result<()> {
    std::process::Command::new(browser_program())
        .arg(path)
        .spawn()?;
    log::info!("Opened file browser at {}", path.display());
    Ok(())
}

fn browser_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetType;

    fn entry(path: &str, is_directory: bool) -> AssetEntry {
        AssetEntry {
            name: Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            path: PathBuf::from(path),
            asset_type: AssetType::Unknown,
            size_bytes: 0,
            modified: None,
            is_directory,
        }
    }

    #[test]
    fn test_no_selection_targets_project_root() {
        let target = reveal_target(None, Path::new("/proj"));
        assert_eq!(target, PathBuf::from("/proj"));
    }

    #[test]
    fn test_selected_file_targets_its_directory() {
        let e = entry("/proj/Scripts/enemy.lua", false);
        let target = reveal_target(Some(&e), Path::new("/proj"));
        assert_eq!(target, PathBuf::from("/proj/Scripts"));
    }

    #[test]
    fn test_selected_directory_targets_itself() {
        let e = entry("/proj/Scenes", true);
        let target = reveal_target(Some(&e), Path::new("/proj"));
        assert_eq!(target, PathBuf::from("/proj/Scenes"));
    }
}
