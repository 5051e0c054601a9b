//! Record streams over landing-zone CSV and JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use drugmention_model::{RawRow, SourceFileType};
use serde_json::Value;

use crate::error::{IngestError, Result};

/// Finite, non-restartable stream of rows from one file.
///
/// Every row carries `source_file` (the file stem) and `source_file_type`.
/// The CSV variant keeps the file open until the stream is dropped.
pub struct RawRecords {
    inner: Inner,
}

enum Inner {
    Csv {
        records: csv::StringRecordsIntoIter<File>,
        field_names: Vec<String>,
        source: SourceTag,
        path: PathBuf,
    },
    Json {
        rows: std::vec::IntoIter<RawRow>,
    },
}

struct SourceTag {
    stem: String,
    file_type: SourceFileType,
}

impl SourceTag {
    fn tag(&self, row: &mut RawRow) {
        row.insert("source_file".to_string(), Some(self.stem.clone()));
        row.insert(
            "source_file_type".to_string(),
            Some(self.file_type.as_str().to_string()),
        );
    }
}

impl Iterator for RawRecords {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Csv {
                records,
                field_names,
                source,
                path,
            } => {
                let record = records.next()?;
                Some(
                    record
                        .map(|record| {
                            let mut row: RawRow = field_names
                                .iter()
                                .enumerate()
                                .map(|(idx, name)| {
                                    (name.clone(), record.get(idx).map(String::from))
                                })
                                .collect();
                            source.tag(&mut row);
                            row
                        })
                        .map_err(|e| IngestError::CsvParse {
                            path: path.clone(),
                            message: e.to_string(),
                        }),
                )
            }
            Inner::Json { rows } => rows.next().map(Ok),
        }
    }
}

/// Open a landing-zone file as a stream of raw rows.
///
/// CSV files have their header line skipped and their columns mapped
/// positionally onto `field_names`; short rows yield `None` for the
/// missing fields and surplus columns are dropped. JSON files must hold an
/// array of objects and ignore `field_names`.
///
/// # Errors
///
/// [`IngestError::UnsupportedFormat`] for any other extension (checked
/// first), [`IngestError::FileNotFound`] when the path is not a regular file,
/// [`IngestError::JsonParse`] for an unreadable JSON document.
pub fn read_raw_records(path: &Path, field_names: &[&str]) -> Result<RawRecords> {
    let file_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(SourceFileType::from_extension)
        .ok_or_else(|| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = SourceTag {
        stem: path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string(),
        file_type,
    };
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;

    let inner = match file_type {
        SourceFileType::Csv => {
            let reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_reader(file);
            Inner::Csv {
                records: reader.into_records(),
                field_names: field_names.iter().map(|name| (*name).to_string()).collect(),
                source,
                path: path.to_path_buf(),
            }
        }
        SourceFileType::Json => {
            let rows = read_json_rows(path, file, &source)?;
            Inner::Json {
                rows: rows.into_iter(),
            }
        }
    };

    tracing::debug!(path = %path.display(), file_type = %file_type, "opened landing file");

    Ok(RawRecords { inner })
}

fn read_json_rows(path: &Path, file: File, source: &SourceTag) -> Result<Vec<RawRow>> {
    let documents: Vec<serde_json::Map<String, Value>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(documents
        .into_iter()
        .map(|document| {
            let mut row: RawRow = document
                .into_iter()
                .map(|(key, value)| (key, json_text(value)))
                .collect();
            source.tag(&mut row);
            row
        })
        .collect())
}

fn json_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn json_scalars_become_text() {
        assert_eq!(json_text(Value::Null), None);
        assert_eq!(json_text(Value::from(7)), Some("7".to_string()));
        assert_eq!(json_text(Value::from("a")), Some("a".to_string()));
    }

    #[test]
    fn short_csv_rows_yield_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drugs.csv");
        std::fs::write(&path, "atccode,drug\nA04AD\n").unwrap();

        let rows: Vec<RawRow> = read_raw_records(&path, &["atccode", "drug"])
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["atccode"], Some("A04AD".to_string()));
        assert_eq!(rows[0]["drug"], None);
    }
}
