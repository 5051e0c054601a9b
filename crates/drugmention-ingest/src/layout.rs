//! Landing-zone file names and fixed CSV schemas.

/// Publication files accepted from the publications landing folder.
pub const PUBLICATION_FILE_NAMES: &[&str] = &["clinical_trials.csv", "pubmed.csv", "pubmed.json"];

/// Drug files accepted from the referential landing folder.
pub const DRUG_FILE_NAMES: &[&str] = &["drugs.csv"];

/// Column names applied positionally to publication CSV files.
pub const PUBLICATION_FIELD_NAMES: &[&str] = &["id", "title", "date", "journal"];

/// Column names applied positionally to drug CSV files.
pub const DRUG_FIELD_NAMES: &[&str] = &["atccode", "drug"];
