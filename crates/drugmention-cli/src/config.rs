//! Storage zone locations.

use std::env;
use std::path::{Path, PathBuf};

/// Overrides the data root every default zone path hangs off.
pub const DATA_DIR_ENV_VAR: &str = "DRUGMENTION_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

/// Directories the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonePaths {
    /// Landing zone for publication files.
    pub publications: PathBuf,
    /// Landing zone for referential drug files.
    pub drugs: PathBuf,
    pub silver: PathBuf,
    pub gold: PathBuf,
    /// Rows that failed validation.
    pub trash: PathBuf,
}

impl ZonePaths {
    /// Standard zone layout below `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            publications: root.join("landing_zone").join("publications_data"),
            drugs: root.join("landing_zone").join("referential_data"),
            silver: root.join("silver_zone"),
            gold: root.join("gold_zone"),
            trash: root.join("corrupted_data"),
        }
    }

    /// Layout below [`data_root`].
    pub fn from_env() -> Self {
        Self::under(&data_root())
    }
}

impl Default for ZonePaths {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `$DRUGMENTION_DATA_DIR` when set and non-empty, else `./data`.
pub fn data_root() -> PathBuf {
    env::var_os(DATA_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}
