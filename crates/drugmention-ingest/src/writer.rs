//! JSON artifact storage for the silver, gold and trash zones.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use drugmention_model::SnapshotRecord;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{IngestError, Result};

/// Write `value` to `path` as UTF-8 JSON indented by four spaces.
///
/// Non-ASCII characters are written as-is; dates and timestamps use their
/// serde string form. The file is created or truncated.
pub fn write_json<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| IngestError::JsonWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| IngestError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), "wrote json artifact");
    Ok(())
}

/// Read a persisted snapshot back as plain field mappings.
///
/// # Errors
///
/// [`IngestError::FileNotFound`] when the file is missing and
/// [`IngestError::SnapshotShape`] when it is not a JSON array of objects.
pub fn read_snapshot(path: &Path) -> Result<Vec<SnapshotRecord>> {
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;
    let document: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::SnapshotShape {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let Value::Array(items) = document else {
        return Err(IngestError::SnapshotShape {
            path: path.to_path_buf(),
            reason: "expected a JSON array of records".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(IngestError::SnapshotShape {
                path: path.to_path_buf(),
                reason: format!("record {index} is not an object"),
            }),
        })
        .collect()
}
