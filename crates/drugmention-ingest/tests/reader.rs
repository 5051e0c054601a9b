//! Integration tests for landing-zone record streams.

use std::path::Path;

use drugmention_ingest::{
    IngestError, PUBLICATION_FIELD_NAMES, PUBLICATION_FILE_NAMES, list_files_in_folder,
    read_raw_records,
};
use drugmention_model::{RawRow, raw_row};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn collect(path: &Path) -> Vec<RawRow> {
    read_raw_records(path, PUBLICATION_FIELD_NAMES)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn unsupported_extension_is_rejected_before_existence_check() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("unsupported_file.txt");

    let result = read_raw_records(&missing, PUBLICATION_FIELD_NAMES);

    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("pubmed.csv");

    let result = read_raw_records(&missing, PUBLICATION_FIELD_NAMES);

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn csv_rows_are_mapped_onto_field_names() {
    let dir = TempDir::new().unwrap();
    // The header line is skipped regardless of its spelling.
    let path = write(
        dir.path(),
        "pubmed.csv",
        "ID,Title,Date,Journal\n1,FAKE_TITLE,2024-11-13,Journal of emergency nursing\n",
    );

    let rows = collect(&path);

    let expected = raw_row([
        ("id", "1"),
        ("title", "FAKE_TITLE"),
        ("date", "2024-11-13"),
        ("journal", "Journal of emergency nursing"),
        ("source_file", "pubmed"),
        ("source_file_type", "csv"),
    ]);
    assert_eq!(rows, vec![expected]);
}

#[test]
fn csv_quoted_fields_keep_commas() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "clinical_trials.csv",
        "id,scientific_title,date,journal\n\
         NCT01,\"Tranexamic acid, a review\",1 January 2020,\
         \"Journal of photochemistry and photobiology. B, Biology\"\n",
    );

    let rows = collect(&path);

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0]["title"].as_deref(),
        Some("Tranexamic acid, a review")
    );
    assert_eq!(
        rows[0]["journal"].as_deref(),
        Some("Journal of photochemistry and photobiology. B, Biology")
    );
    assert_eq!(rows[0]["source_file"].as_deref(), Some("clinical_trials"));
}

#[test]
fn json_rows_keep_their_own_keys() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "pubmed.json",
        r#"[
            {"id": 9, "title": "Gold nanoparticles", "date": "01/03/2020", "journal": null},
            {
                "id": "10",
                "title": "Ethanol",
                "date": "2020-01-01",
                "journal": "Psychopharmacology",
                "extra": true
            }
        ]"#,
    );

    let rows = collect(&path);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"].as_deref(), Some("9"));
    assert_eq!(rows[0]["journal"], None);
    assert_eq!(rows[0]["source_file_type"].as_deref(), Some("json"));
    assert_eq!(rows[1]["extra"].as_deref(), Some("true"));
}

#[test]
fn rows_keep_source_key_order() {
    let dir = TempDir::new().unwrap();
    let csv = write(
        dir.path(),
        "pubmed.csv",
        "id,title,date,journal\n1,Ethanol,2020-01-01,Psychopharmacology\n",
    );
    let json = write(
        dir.path(),
        "clinical_trials.json",
        r#"[{"title": "Ethanol", "journal": "Psychopharmacology", "date": "2020-01-01", "id": 2}]"#,
    );

    let csv_keys: Vec<String> = collect(&csv)[0].keys().cloned().collect();
    let json_keys: Vec<String> = collect(&json)[0].keys().cloned().collect();

    assert_eq!(
        csv_keys,
        ["id", "title", "date", "journal", "source_file", "source_file_type"]
    );
    assert_eq!(
        json_keys,
        ["title", "journal", "date", "id", "source_file", "source_file_type"]
    );
}

#[test]
fn malformed_json_is_a_format_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "pubmed.json", "[{\"id\": 1,}]");

    let result = read_raw_records(&path, PUBLICATION_FIELD_NAMES);

    assert!(matches!(result, Err(IngestError::JsonParse { .. })));
}

#[test]
fn discovery_ignores_unlisted_files() {
    let dir = TempDir::new().unwrap();
    let csv = write(dir.path(), "pubmed.csv", "id,title,date,journal\n");
    let json = write(dir.path(), "pubmed.json", "[]");
    write(dir.path(), "dummy_file.txt", "FAKE_CONTENT");

    let files = list_files_in_folder(dir.path(), PUBLICATION_FILE_NAMES).unwrap();

    assert_eq!(files, vec![csv, json]);
}
