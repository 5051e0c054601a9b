//! Record definitions shared by the drug mention pipeline.
//!
//! Raw input rows ([`RawRow`]) are loosely typed; everything downstream of
//! validation works with the three closed record kinds gathered in
//! [`ValidatedRecord`]. Persisted snapshots are read back as
//! [`SnapshotRecord`] mappings.

pub mod context;
pub mod error;
pub mod raw;
pub mod record;

pub use context::RunContext;
pub use error::{Result, ValidationError};
pub use raw::{RawRow, SnapshotRecord, raw_row};
pub use record::{
    CrossReferenceRecord, DEFAULT_DRUG_SOURCE_FILE, DrugRecord, PublicationRecord, RecordKind,
    SourceFileType, ValidatedRecord,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn validated_record_reports_kind() {
        let drug = DrugRecord {
            atccode: "A04AD".to_string(),
            drug: "DIPHENHYDRAMINE".to_string(),
            source_file: DEFAULT_DRUG_SOURCE_FILE.to_string(),
            source_file_type: SourceFileType::Csv,
        };
        let record = ValidatedRecord::from(drug);
        assert_eq!(record.kind(), RecordKind::Drug);
    }

    #[test]
    fn publication_mapping_uses_iso_dates() {
        let publication = PublicationRecord {
            title: "Aspirin in heart disease".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            journal: "Heart Journal".to_string(),
            source_file: "pubmed".to_string(),
            source_file_type: SourceFileType::Json,
        };
        let mapping = ValidatedRecord::from(publication).to_mapping();
        assert_eq!(mapping["date"], "2020-01-01");
        assert_eq!(mapping["source_file_type"], "json");
    }
}
