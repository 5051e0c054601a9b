//! Drug/journal lookups over persisted cross-reference mappings.

use std::collections::BTreeSet;

use drugmention_model::SnapshotRecord;
use tracing::{debug, warn};

/// String value of `key`, or `None` when absent or not a string.
pub(crate) fn text_field<'a>(record: &'a SnapshotRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(serde_json::Value::as_str)
}

/// Journals holding a record for `drug`.
///
/// `drug` is trimmed, then both sides are lowercased and compared exactly,
/// so `"aspirin "` finds `"ASPIRIN"` but `"aspir"` finds nothing. Stored
/// drug names are not trimmed. Records without a `drug` or `journal` string
/// are skipped with a warning.
pub fn journals_mentioning(data: &[SnapshotRecord], drug: &str) -> BTreeSet<String> {
    let target = drug.trim().to_lowercase();
    let mut journals = BTreeSet::new();

    for (index, record) in data.iter().enumerate() {
        let Some(candidate) = text_field(record, "drug") else {
            warn!(index, field = "drug", "skipping record without field");
            continue;
        };
        if candidate.to_lowercase() != target {
            continue;
        }
        match text_field(record, "journal") {
            Some(journal) => {
                journals.insert(journal.to_string());
            }
            None => warn!(index, field = "journal", "skipping record without field"),
        }
    }

    debug!(drug, journal_count = journals.len(), "journals mentioning drug");
    journals
}

/// Drugs mentioned by any of `journals`.
///
/// With `source_file` set, only records from exactly that source file
/// count. Records missing a field the check needs are skipped with a warning.
pub fn drugs_in_journals(
    data: &[SnapshotRecord],
    journals: &BTreeSet<String>,
    source_file: Option<&str>,
) -> BTreeSet<String> {
    let mut drugs = BTreeSet::new();

    for (index, record) in data.iter().enumerate() {
        let Some(journal) = text_field(record, "journal") else {
            warn!(index, field = "journal", "skipping record without field");
            continue;
        };
        if !journals.contains(journal) {
            continue;
        }
        if let Some(filter) = source_file {
            match text_field(record, "source_file") {
                Some(source) if source == filter => {}
                Some(_) => continue,
                None => {
                    warn!(index, field = "source_file", "skipping record without field");
                    continue;
                }
            }
        }
        match text_field(record, "drug") {
            Some(drug) => {
                drugs.insert(drug.to_string());
            }
            None => warn!(index, field = "drug", "skipping record without field"),
        }
    }

    drugs
}

/// Drugs sharing at least one journal with `drug`.
///
/// Returns `None` when `drug` is not mentioned in any journal; the second
/// lookup is not attempted in that case.
pub fn drugs_co_mentioned_with(
    data: &[SnapshotRecord],
    drug: &str,
    source_file: Option<&str>,
) -> Option<BTreeSet<String>> {
    let journals = journals_mentioning(data, drug);
    if journals.is_empty() {
        warn!(drug, "drug is not mentioned in any journal");
        return None;
    }
    Some(drugs_in_journals(data, &journals, source_file))
}
