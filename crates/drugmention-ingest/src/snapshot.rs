//! Dated artifact names and latest-snapshot lookup.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Artifacts written to the silver, gold and trash zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotName<'a> {
    PublicationData,
    PublicationErrors,
    DrugData,
    DrugErrors,
    CrossReferenceData,
    CrossReferenceErrors,
    TheJournal,
    DrugsByJournals { drug: &'a str },
}

impl SnapshotName<'_> {
    /// File name prefix, everything before `_<YYYY_MM_DD>.json`.
    pub fn prefix(&self) -> String {
        match self {
            SnapshotName::PublicationData => "pubclinical_data".to_string(),
            SnapshotName::PublicationErrors => "pubclinical_validation_errors".to_string(),
            SnapshotName::DrugData => "drugs_data".to_string(),
            SnapshotName::DrugErrors => "drugs_validation_errors".to_string(),
            SnapshotName::CrossReferenceData => "cross_reference_data".to_string(),
            SnapshotName::CrossReferenceErrors => "cross_reference_errors".to_string(),
            SnapshotName::TheJournal => "the_journal".to_string(),
            SnapshotName::DrugsByJournals { drug } => {
                format!("drugs_by_journals_by_{}", file_safe(drug))
            }
        }
    }

    pub fn file_name(&self, date_stamp: &str) -> String {
        format!("{}_{date_stamp}.json", self.prefix())
    }
}

// Drug names come from the command line; keep them inside the zone folder.
fn file_safe(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if matches!(c, '/' | '\\') || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Find the newest `<prefix>_*.json` file in `dir`.
///
/// Dated names sort chronologically, so the lexicographically greatest file
/// name wins. Returns `Ok(None)` when nothing matches.
pub fn find_latest_snapshot(dir: &Path, prefix: &str) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let head = format!("{prefix}_");
    let mut latest: Option<(String, PathBuf)> = None;
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            continue;
        };
        if !(name.starts_with(&head) && name.ends_with(".json")) {
            continue;
        }
        let newer = latest
            .as_ref()
            .map(|(best, _)| name > *best)
            .unwrap_or(true);
        if newer {
            latest = Some((name, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
