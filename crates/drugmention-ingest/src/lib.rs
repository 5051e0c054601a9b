//! File-system side of the drug mention pipeline.
//!
//! This crate owns everything that touches the storage zones:
//!
//! - **Discovery**: list the accepted landing-zone files of a folder
//! - **Record streams**: read CSV/JSON files into [`RawRow`]s tagged with their source
//! - **Snapshots**: write indented JSON artifacts and read cross-reference snapshots back
//! - **Naming**: dated artifact names and latest-snapshot lookup
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use drugmention_ingest::{list_files_in_folder, read_raw_records, PUBLICATION_FILE_NAMES,
//!     PUBLICATION_FIELD_NAMES};
//!
//! let files = list_files_in_folder(Path::new("data/landing_zone/publications_data"),
//!     PUBLICATION_FILE_NAMES)?;
//! for file in &files {
//!     for row in read_raw_records(file, PUBLICATION_FIELD_NAMES)? {
//!         let row = row?;
//!         // ...
//!     }
//! }
//! ```
//!
//! [`RawRow`]: drugmention_model::RawRow

mod discovery;
mod error;
mod layout;
mod reader;
mod snapshot;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Landing-zone layout ===
pub use layout::{
    DRUG_FIELD_NAMES, DRUG_FILE_NAMES, PUBLICATION_FIELD_NAMES, PUBLICATION_FILE_NAMES,
};

// === File Discovery ===
pub use discovery::list_files_in_folder;

// === Record Streams ===
pub use reader::{RawRecords, read_raw_records};

// === Snapshot Storage ===
pub use snapshot::{SnapshotName, find_latest_snapshot};
pub use writer::{read_snapshot, write_json};
