//! Record validation: the single boundary from raw rows to typed records.
//!
//! Each record kind implements [`Curate`] and owns its field rules:
//!
//! | kind | rules |
//! |---|---|
//! | publication | `title`/`journal` hex-cleaned, non-empty; `date` flexible; source required |
//! | drug | `atccode`/`drug` non-empty, source fields defaulted |
//! | cross-reference | `drug` non-empty, `journal` set, `mention_date` flexible, source required |
//!
//! Fields a kind does not know are ignored.

use chrono::NaiveDate;
use drugmention_model::{
    CrossReferenceRecord, DEFAULT_DRUG_SOURCE_FILE, DrugRecord, PublicationRecord, RawRow,
    RecordKind, Result, RunContext, SourceFileType, ValidatedRecord, ValidationError,
};
use tracing::error;

use crate::date::parse_flexible_date;
use crate::text::clean_hex_escapes;

/// A record kind that can be built from a raw row.
pub trait Curate: Sized {
    const KIND: RecordKind;

    /// Validate and normalize one row.
    ///
    /// # Errors
    ///
    /// Returns the first field rule the row breaks.
    fn curate(row: &RawRow, ctx: &RunContext) -> Result<Self>;
}

/// Valid records and rejected rows of one batch, each in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Curated<T, E = RawRow> {
    pub valid: Vec<T>,
    pub errors: Vec<E>,
}

impl<T, E> Default for Curated<T, E> {
    fn default() -> Self {
        Self {
            valid: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T, E> Curated<T, E> {
    pub fn extend(&mut self, other: Curated<T, E>) {
        self.valid.extend(other.valid);
        self.errors.extend(other.errors);
    }
}

/// Validate every row, routing failures to the error list.
///
/// A failing row never stops the batch; it is logged with its error.
pub fn curate_rows<T: Curate>(
    rows: impl IntoIterator<Item = RawRow>,
    ctx: &RunContext,
) -> Curated<T> {
    let kind = T::KIND;
    let mut curated = Curated::default();
    for row in rows {
        match T::curate(&row, ctx) {
            Ok(record) => curated.valid.push(record),
            Err(err) => {
                error!(kind = %kind, row = ?row, error = %err, "row failed validation");
                curated.errors.push(row);
            }
        }
    }
    curated
}

/// Validate one row into the requested record kind.
pub fn validate(kind: RecordKind, row: &RawRow, ctx: &RunContext) -> Result<ValidatedRecord> {
    match kind {
        RecordKind::Publication => PublicationRecord::curate(row, ctx).map(ValidatedRecord::from),
        RecordKind::Drug => DrugRecord::curate(row, ctx).map(ValidatedRecord::from),
        RecordKind::CrossReference => {
            CrossReferenceRecord::curate(row, ctx).map(ValidatedRecord::from)
        }
    }
}

impl Curate for PublicationRecord {
    const KIND: RecordKind = RecordKind::Publication;

    fn curate(row: &RawRow, _ctx: &RunContext) -> Result<Self> {
        Ok(Self {
            title: cleaned_text(row, "title")?,
            date: date_field(row, "date")?,
            journal: cleaned_text(row, "journal")?,
            source_file: required(row, "source_file")?.to_string(),
            source_file_type: source_file_type(required(row, "source_file_type")?)?,
        })
    }
}

impl Curate for DrugRecord {
    const KIND: RecordKind = RecordKind::Drug;

    fn curate(row: &RawRow, _ctx: &RunContext) -> Result<Self> {
        let source_file_type = match optional(row, "source_file_type") {
            Some(value) => source_file_type(value)?,
            None => SourceFileType::Csv,
        };
        Ok(Self {
            atccode: non_empty("atccode", required(row, "atccode")?)?.to_string(),
            drug: non_empty("drug", required(row, "drug")?)?.to_string(),
            source_file: optional(row, "source_file")
                .unwrap_or(DEFAULT_DRUG_SOURCE_FILE)
                .to_string(),
            source_file_type,
        })
    }
}

impl Curate for CrossReferenceRecord {
    const KIND: RecordKind = RecordKind::CrossReference;

    fn curate(row: &RawRow, ctx: &RunContext) -> Result<Self> {
        Ok(Self {
            drug: non_empty("drug", required(row, "drug")?)?.to_string(),
            journal: required(row, "journal")?.to_string(),
            mention_date: date_field(row, "mention_date")?,
            source_file: required(row, "source_file")?.to_string(),
            ingestion_timestamp: ctx.started_at,
        })
    }
}

fn optional<'a>(row: &'a RawRow, field: &'static str) -> Option<&'a str> {
    row.get(field).and_then(Option::as_deref)
}

fn required<'a>(row: &'a RawRow, field: &'static str) -> Result<&'a str> {
    optional(row, field).ok_or(ValidationError::MissingField { field })
}

pub(crate) fn non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

fn cleaned_text(row: &RawRow, field: &'static str) -> Result<String> {
    let cleaned = clean_hex_escapes(required(row, field)?);
    non_empty(field, &cleaned)?;
    Ok(cleaned.into_owned())
}

fn date_field(row: &RawRow, field: &'static str) -> Result<NaiveDate> {
    let value = required(row, field)?;
    parse_flexible_date(value).ok_or_else(|| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn source_file_type(value: &str) -> Result<SourceFileType> {
    SourceFileType::from_extension(value.trim()).ok_or_else(|| {
        ValidationError::InvalidSourceFileType {
            value: value.to_string(),
        }
    })
}
