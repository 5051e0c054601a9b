//! Typed records produced by validation and cross-referencing.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::raw::SnapshotRecord;

/// Source file recorded on drugs whose row does not name one.
pub const DEFAULT_DRUG_SOURCE_FILE: &str = "drugs.csv";

/// Format of the landing-zone file a record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFileType {
    #[default]
    Csv,
    Json,
}

impl SourceFileType {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFileType::Csv => "csv",
            SourceFileType::Json => "json",
        }
    }

    /// Match a file extension (without the dot), case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("csv") {
            Some(SourceFileType::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(SourceFileType::Json)
        } else {
            None
        }
    }
}

impl fmt::Display for SourceFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clinical trial or PubMed publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub title: String,
    pub date: NaiveDate,
    pub journal: String,
    pub source_file: String,
    pub source_file_type: SourceFileType,
}

/// A drug from the referential file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    pub atccode: String,
    pub drug: String,
    pub source_file: String,
    pub source_file_type: SourceFileType,
}

/// A drug name found in a publication title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceRecord {
    pub drug: String,
    pub journal: String,
    pub mention_date: NaiveDate,
    pub source_file: String,
    pub ingestion_timestamp: NaiveDateTime,
}

/// The record kinds a raw row can be validated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Publication,
    Drug,
    CrossReference,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Publication => "publication",
            RecordKind::Drug => "drug",
            RecordKind::CrossReference => "cross_reference",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of validated records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedRecord {
    Publication(PublicationRecord),
    Drug(DrugRecord),
    CrossReference(CrossReferenceRecord),
}

impl ValidatedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            ValidatedRecord::Publication(_) => RecordKind::Publication,
            ValidatedRecord::Drug(_) => RecordKind::Drug,
            ValidatedRecord::CrossReference(_) => RecordKind::CrossReference,
        }
    }

    pub fn to_mapping(&self) -> SnapshotRecord {
        match self {
            ValidatedRecord::Publication(record) => record.to_mapping(),
            ValidatedRecord::Drug(record) => record.to_mapping(),
            ValidatedRecord::CrossReference(record) => record.to_mapping(),
        }
    }
}

impl From<PublicationRecord> for ValidatedRecord {
    fn from(record: PublicationRecord) -> Self {
        ValidatedRecord::Publication(record)
    }
}

impl From<DrugRecord> for ValidatedRecord {
    fn from(record: DrugRecord) -> Self {
        ValidatedRecord::Drug(record)
    }
}

impl From<CrossReferenceRecord> for ValidatedRecord {
    fn from(record: CrossReferenceRecord) -> Self {
        ValidatedRecord::CrossReference(record)
    }
}

impl PublicationRecord {
    pub fn to_mapping(&self) -> SnapshotRecord {
        to_mapping(self)
    }
}

impl DrugRecord {
    pub fn to_mapping(&self) -> SnapshotRecord {
        to_mapping(self)
    }
}

impl CrossReferenceRecord {
    pub fn to_mapping(&self) -> SnapshotRecord {
        to_mapping(self)
    }
}

fn to_mapping<T: Serialize>(record: &T) -> SnapshotRecord {
    // Plain structs of strings and chrono values always serialize to an object.
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => SnapshotRecord::new(),
    }
}
