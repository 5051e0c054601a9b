//! Curation, cross-referencing and aggregation for drug mentions.
//!
//! Stages, leaf-first:
//! 1. **Validate**: raw rows become [`PublicationRecord`]s and [`DrugRecord`]s
//! 2. **Cross-reference**: drug names are matched against publication titles
//! 3. **Aggregate**: journals are ranked by distinct drugs mentioned
//! 4. **Query**: drugs sharing a journal with a given drug
//!
//! Nothing in this crate touches the file system; the caller owns reading
//! landing files and persisting snapshots.
//!
//! [`PublicationRecord`]: drugmention_model::PublicationRecord
//! [`DrugRecord`]: drugmention_model::DrugRecord

pub mod aggregate;
pub mod cross_reference;
pub mod date;
pub mod query;
pub mod text;
pub mod validate;

pub use aggregate::{
    AggregateError, JournalGroup, group_by_journal, journal_with_max_distinct_drugs,
};
pub use cross_reference::{CrossReferenceCandidate, cross_reference};
pub use date::parse_flexible_date;
pub use query::{drugs_co_mentioned_with, drugs_in_journals, journals_mentioning};
pub use text::clean_hex_escapes;
pub use validate::{Curate, Curated, curate_rows, validate};
