//! Standard project folder creation.

use std::path::PathBuf;

use super::ProjectLayout;

/// The standard folders that do not exist yet.
pub fn missing_folders(layout: &ProjectLayout) -> Vec<PathBuf> {
    layout
        .standard_folders()
        .into_iter()
        .filter(|p| !p.is_dir())
        .collect()
}

/// Create the given folders, parents included.
///
/// Returns the number of folders created; any I/O failure propagates to
/// the caller untouched.
pub fn create_folders(paths: &[PathBuf]) -> std::io::Result<usize> {
    for path in paths {
        std::fs::create_dir_all(path)?;
        log::info!("Created folder {}", path.display());
    }
    Ok(paths.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_folders_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path().to_path_buf());
        std::fs::create_dir(layout.scenes_dir()).unwrap();

        let missing = missing_folders(&layout);
        assert_eq!(missing, vec![layout.editor_dir(), layout.scripts_dir()]);
    }

    #[test]
    fn test_create_folders() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path().to_path_buf());

        let created = create_folders(&missing_folders(&layout)).unwrap();
        assert_eq!(created, 3);
        assert!(layout.editor_dir().is_dir());
        assert!(layout.scenes_dir().is_dir());
        assert!(layout.scripts_dir().is_dir());

        // Second run finds nothing to do
        assert!(missing_folders(&layout).is_empty());
    }
}
