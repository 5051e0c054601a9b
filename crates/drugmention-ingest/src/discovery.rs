//! File discovery for landing-zone folders.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists the regular files of `dir` whose file name is one of `accepted`.
///
/// Returns files sorted by filename.
pub fn list_files_in_folder(dir: &Path, accepted: &[&str]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_accepted = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| accepted.contains(&name))
            .unwrap_or(false);

        if is_accepted {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        dir = %dir.display(),
        file_count = files.len(),
        "listed landing files"
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PUBLICATION_FILE_NAMES;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["pubmed.json", "pubmed.csv", "dummy_file.txt", "drugs.csv"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "header\ndata").unwrap();
        }
        std::fs::create_dir(dir.path().join("clinical_trials.csv")).unwrap();

        dir
    }

    #[test]
    fn test_list_files_only_accepted_names() {
        let dir = create_test_dir();
        let files = list_files_in_folder(dir.path(), PUBLICATION_FILE_NAMES).unwrap();

        let names: Vec<&str> = files
            .iter()
            .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
            .collect();
        // The directory named like an accepted file is skipped.
        assert_eq!(names, vec!["pubmed.csv", "pubmed.json"]);
    }

    #[test]
    fn test_list_files_empty_dir() {
        let dir = TempDir::new().unwrap();
        let files = list_files_in_folder(dir.path(), PUBLICATION_FILE_NAMES).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_files_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("pubmed.csv");
        std::fs::write(&file_path, "data").unwrap();

        let result = list_files_in_folder(&file_path, PUBLICATION_FILE_NAMES);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
