//! Journal ranking by distinct drugs mentioned.
//!
//! Works on the persisted cross-reference mappings rather than typed records,
//! so a snapshot written by an earlier run can be ranked as-is.

use std::collections::BTreeSet;

use drugmention_model::SnapshotRecord;
use thiserror::Error;
use tracing::debug;

use crate::query::text_field;

/// Distinct drug count for one journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalGroup {
    pub journal: String,
    pub distinct_drugs: usize,
}

impl JournalGroup {
    /// `(journal, distinct_drugs)`, the shape persisted as the result
    /// artifact (a two-element JSON array).
    pub fn as_pair(&self) -> (&str, usize) {
        (self.journal.as_str(), self.distinct_drugs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("record {index} has no string '{field}' field")]
    MissingField { index: usize, field: &'static str },

    #[error("no journal mentions any drug")]
    NoJournalFound,
}

/// Group records by journal and count distinct drugs per group.
///
/// Records are sorted by journal first; groups are the contiguous runs of
/// the sorted list. Drug names are compared case-sensitively.
///
/// # Errors
///
/// Returns [`AggregateError::MissingField`] when a record lacks a string
/// `journal` or `drug`.
pub fn group_by_journal(
    records: &[SnapshotRecord],
) -> Result<Vec<JournalGroup>, AggregateError> {
    let mut pairs = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let journal = text_field(record, "journal").ok_or(AggregateError::MissingField {
                index,
                field: "journal",
            })?;
            let drug = text_field(record, "drug").ok_or(AggregateError::MissingField {
                index,
                field: "drug",
            })?;
            Ok((journal, drug))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let groups = pairs
        .chunk_by(|a, b| a.0 == b.0)
        .map(|run| JournalGroup {
            journal: run[0].0.to_string(),
            distinct_drugs: run.iter().map(|(_, drug)| *drug).collect::<BTreeSet<_>>().len(),
        })
        .collect();
    Ok(groups)
}

/// The journal mentioning the most distinct drugs.
///
/// Groups are visited in journal order; a group becomes a leader only when
/// its count strictly exceeds every earlier one. On a tie the earliest
/// journal to reach the maximum wins and the others are not reported.
///
/// # Errors
///
/// [`AggregateError::NoJournalFound`] when there are no records, or
/// [`AggregateError::MissingField`] for a malformed record.
pub fn journal_with_max_distinct_drugs(
    records: &[SnapshotRecord],
) -> Result<JournalGroup, AggregateError> {
    let groups = group_by_journal(records)?;

    let mut max = 0;
    let mut leaders: Vec<JournalGroup> = Vec::new();
    for group in groups {
        if group.distinct_drugs > max {
            max = group.distinct_drugs;
            leaders.push(group);
        }
    }

    let winner = leaders
        .into_iter()
        .find(|group| group.distinct_drugs == max)
        .ok_or(AggregateError::NoJournalFound)?;
    debug!(
        journal = %winner.journal,
        distinct_drugs = winner.distinct_drugs,
        "journal ranked first"
    );
    Ok(winner)
}
