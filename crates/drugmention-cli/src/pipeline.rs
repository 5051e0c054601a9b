//! Pipeline orchestration for the ingest and query runs.
//!
//! The ingest run walks
//!
//! 1. **Publications**: list, read, validate, persist valid rows and rejects
//! 2. **Drugs**: same, against the referential zone
//! 3. **Cross-reference**: match drugs to titles, persist matches and rejects
//!
//! Every artifact is persisted on its own; a failed write is logged and
//! recorded in the summary while the run moves on. Query runs read the latest
//! cross-reference snapshot from the silver zone and write one result to the
//! gold zone.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info, info_span, warn};

use drugmention_core::{
    AggregateError, Curate, Curated, JournalGroup, cross_reference, curate_rows,
    drugs_co_mentioned_with, journal_with_max_distinct_drugs,
};
use drugmention_ingest::{
    DRUG_FIELD_NAMES, DRUG_FILE_NAMES, IngestError, PUBLICATION_FIELD_NAMES,
    PUBLICATION_FILE_NAMES, SnapshotName, find_latest_snapshot, list_files_in_folder,
    read_raw_records, read_snapshot, write_json,
};
use drugmention_model::{DrugRecord, PublicationRecord, RawRow, RunContext, SnapshotRecord};

use crate::config::ZonePaths;

/// One artifact written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary {
    /// Artifact name without the date suffix.
    pub name: String,
    pub records: usize,
    pub path: PathBuf,
}

/// Outcome of one ingest run.
#[derive(Debug, Clone, Default)]
pub struct IngestSummary {
    /// Landing files that were read, in processing order.
    pub files: Vec<PathBuf>,
    pub artifacts: Vec<ArtifactSummary>,
    /// Files or artifacts that were skipped, as display messages.
    pub errors: Vec<String>,
}

impl IngestSummary {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn artifact(&self, name: &str) -> Option<&ArtifactSummary> {
        self.artifacts.iter().find(|artifact| artifact.name == name)
    }
}

/// Result payload of a query run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Journal(JournalGroup),
    Drugs(BTreeSet<String>),
}

/// How a query run ended. None of these abort the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Result persisted to the gold zone.
    Written {
        snapshot: PathBuf,
        path: PathBuf,
        result: QueryResult,
    },
    /// No cross-reference snapshot in the silver zone.
    SnapshotMissing { silver: PathBuf },
    /// The snapshot could not be read as cross-reference records.
    MalformedSnapshot { path: PathBuf, reason: String },
    /// The query produced nothing to persist.
    NoResult { reason: String },
}

impl QueryOutcome {
    /// Missing or unreadable input. Empty results are not failures.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            QueryOutcome::SnapshotMissing { .. } | QueryOutcome::MalformedSnapshot { .. }
        )
    }
}

/// Run the full ingest: publications, drugs, then cross-references.
///
/// # Errors
///
/// Fails only when an output zone cannot be created. Unreadable landing
/// files and failed artifact writes are recorded in the summary instead.
pub fn run_ingest(zones: &ZonePaths, ctx: &RunContext) -> Result<IngestSummary> {
    let ingest_span = info_span!("ingest", run_date = %ctx.date_stamp());
    let _ingest_guard = ingest_span.enter();

    for dir in [&zones.silver, &zones.trash] {
        fs::create_dir_all(dir).with_context(|| format!("create zone {}", dir.display()))?;
    }

    let mut summary = IngestSummary::default();

    let publications_span = info_span!("publications", dir = %zones.publications.display());
    let publications = publications_span.in_scope(|| {
        curate_stage::<PublicationRecord>(
            &mut summary,
            zones,
            ctx,
            &zones.publications,
            PUBLICATION_FILE_NAMES,
            PUBLICATION_FIELD_NAMES,
            (SnapshotName::PublicationData, SnapshotName::PublicationErrors),
        )
    });

    let drugs = info_span!("drugs", dir = %zones.drugs.display()).in_scope(|| {
        curate_stage::<DrugRecord>(
            &mut summary,
            zones,
            ctx,
            &zones.drugs,
            DRUG_FILE_NAMES,
            DRUG_FIELD_NAMES,
            (SnapshotName::DrugData, SnapshotName::DrugErrors),
        )
    });

    info_span!("cross_reference").in_scope(|| {
        let start = Instant::now();
        let curated = cross_reference(&drugs, &publications, ctx);
        info!(
            valid = curated.valid.len(),
            errors = curated.errors.len(),
            duration_ms = start.elapsed().as_millis(),
            "cross reference complete"
        );
        persist_curated(
            &mut summary,
            zones,
            ctx,
            &curated,
            (SnapshotName::CrossReferenceData, SnapshotName::CrossReferenceErrors),
        );
    });

    info!(
        files = summary.files.len(),
        artifacts = summary.artifacts.len(),
        errors = summary.errors.len(),
        "ingest complete"
    );
    Ok(summary)
}

/// Rank journals in the latest cross-reference snapshot and persist the top one.
///
/// # Errors
///
/// Fails only when the result cannot be written to the gold zone.
pub fn run_max_drug_journal(
    silver: &Path,
    gold: &Path,
    ctx: &RunContext,
) -> Result<QueryOutcome> {
    let span = info_span!("max_drug_journal", silver = %silver.display());
    let _guard = span.enter();

    let (snapshot, records) = match load_cross_references(silver) {
        Ok(loaded) => loaded,
        Err(outcome) => return Ok(outcome),
    };

    let winner = match journal_with_max_distinct_drugs(&records) {
        Ok(winner) => winner,
        Err(AggregateError::NoJournalFound) => {
            warn!(snapshot = %snapshot.display(), "no journal found");
            return Ok(QueryOutcome::NoResult {
                reason: AggregateError::NoJournalFound.to_string(),
            });
        }
        Err(err @ AggregateError::MissingField { .. }) => {
            error!(
                snapshot = %snapshot.display(),
                error = %err,
                "malformed cross reference snapshot"
            );
            return Ok(QueryOutcome::MalformedSnapshot {
                path: snapshot,
                reason: err.to_string(),
            });
        }
    };

    let path = write_result(gold, SnapshotName::TheJournal, ctx, &winner.as_pair())?;
    info!(
        journal = %winner.journal,
        distinct_drugs = winner.distinct_drugs,
        path = %path.display(),
        "journal with most distinct drugs written"
    );
    Ok(QueryOutcome::Written {
        snapshot,
        path,
        result: QueryResult::Journal(winner),
    })
}

/// Persist the drugs sharing a journal with `drug`.
///
/// With `source_filter` set, only mentions from that source file count
/// toward the result.
///
/// # Errors
///
/// Fails only when the result cannot be written to the gold zone.
pub fn run_drugs_by_journal(
    silver: &Path,
    gold: &Path,
    drug: &str,
    source_filter: Option<&str>,
    ctx: &RunContext,
) -> Result<QueryOutcome> {
    let span = info_span!("drugs_by_journal", drug, source_file = ?source_filter);
    let _guard = span.enter();

    let (snapshot, records) = match load_cross_references(silver) {
        Ok(loaded) => loaded,
        Err(outcome) => return Ok(outcome),
    };

    let Some(drugs) = drugs_co_mentioned_with(&records, drug, source_filter) else {
        return Ok(QueryOutcome::NoResult {
            reason: format!("drug '{}' is not mentioned in any journal", drug.trim()),
        });
    };

    let path = write_result(gold, SnapshotName::DrugsByJournals { drug }, ctx, &drugs)?;
    info!(drug_count = drugs.len(), path = %path.display(), "drugs by journal written");
    Ok(QueryOutcome::Written {
        snapshot,
        path,
        result: QueryResult::Drugs(drugs),
    })
}

fn curate_stage<T: Curate + Serialize>(
    summary: &mut IngestSummary,
    zones: &ZonePaths,
    ctx: &RunContext,
    landing: &Path,
    accepted: &[&str],
    field_names: &[&str],
    names: (SnapshotName<'_>, SnapshotName<'_>),
) -> Vec<T> {
    let kind = T::KIND;
    let start = Instant::now();
    let rows = read_landing_zone(summary, landing, accepted, field_names);
    let row_count = rows.len();
    let curated: Curated<T> = curate_rows(rows, ctx);
    info!(
        kind = %kind,
        rows = row_count,
        valid = curated.valid.len(),
        errors = curated.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    persist_curated(summary, zones, ctx, &curated, names);
    curated.valid
}

/// Read every accepted file of a landing folder into raw rows.
///
/// An unreadable file is logged, recorded and skipped; rows read before a
/// mid-file failure are kept.
fn read_landing_zone(
    summary: &mut IngestSummary,
    dir: &Path,
    accepted: &[&str],
    field_names: &[&str],
) -> Vec<RawRow> {
    let files = match list_files_in_folder(dir, accepted) {
        Ok(files) => files,
        Err(err) => {
            error!(dir = %dir.display(), error = %err, "landing zone unavailable");
            summary.errors.push(err.to_string());
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for file in files {
        match read_file_rows(&file, field_names, &mut rows) {
            Ok(count) => {
                info!(file = %file.display(), rows = count, "landing file read");
            }
            Err(err) => {
                error!(file = %file.display(), error = %err, "skipping unreadable landing file");
                summary.errors.push(err.to_string());
            }
        }
        summary.files.push(file);
    }
    rows
}

fn read_file_rows(
    file: &Path,
    field_names: &[&str],
    rows: &mut Vec<RawRow>,
) -> Result<usize, IngestError> {
    let mut count = 0;
    for row in read_raw_records(file, field_names)? {
        rows.push(row?);
        count += 1;
    }
    Ok(count)
}

fn persist_curated<T: Serialize, E: Serialize>(
    summary: &mut IngestSummary,
    zones: &ZonePaths,
    ctx: &RunContext,
    curated: &Curated<T, E>,
    (data, errors): (SnapshotName<'_>, SnapshotName<'_>),
) {
    persist(summary, &zones.silver, data, ctx, &curated.valid);
    if !curated.errors.is_empty() {
        persist(summary, &zones.trash, errors, ctx, &curated.errors);
    }
}

fn persist<T: Serialize>(
    summary: &mut IngestSummary,
    dir: &Path,
    name: SnapshotName<'_>,
    ctx: &RunContext,
    records: &[T],
) {
    let path = dir.join(name.file_name(&ctx.date_stamp()));
    match write_json(&path, records) {
        Ok(()) => {
            info!(
                artifact = %name.prefix(),
                records = records.len(),
                path = %path.display(),
                "artifact written"
            );
            summary.artifacts.push(ArtifactSummary {
                name: name.prefix(),
                records: records.len(),
                path,
            });
        }
        Err(err) => {
            error!(artifact = %name.prefix(), error = %err, "failed to persist artifact");
            summary.errors.push(err.to_string());
        }
    }
}

fn load_cross_references(
    silver: &Path,
) -> std::result::Result<(PathBuf, Vec<SnapshotRecord>), QueryOutcome> {
    let prefix = SnapshotName::CrossReferenceData.prefix();
    let snapshot = match find_latest_snapshot(silver, &prefix) {
        Ok(Some(path)) => path,
        Ok(None) | Err(IngestError::DirectoryNotFound { .. }) => {
            error!(
                silver = %silver.display(),
                prefix = %prefix,
                "no cross reference snapshot found"
            );
            return Err(QueryOutcome::SnapshotMissing {
                silver: silver.to_path_buf(),
            });
        }
        Err(err) => {
            error!(silver = %silver.display(), error = %err, "failed to list silver zone");
            return Err(QueryOutcome::MalformedSnapshot {
                path: silver.to_path_buf(),
                reason: err.to_string(),
            });
        }
    };

    match read_snapshot(&snapshot) {
        Ok(records) => {
            info!(
                snapshot = %snapshot.display(),
                records = records.len(),
                "cross reference snapshot loaded"
            );
            Ok((snapshot, records))
        }
        Err(err) => {
            error!(
                snapshot = %snapshot.display(),
                error = %err,
                "malformed cross reference snapshot"
            );
            Err(QueryOutcome::MalformedSnapshot {
                path: snapshot,
                reason: err.to_string(),
            })
        }
    }
}

fn write_result<T: Serialize + ?Sized>(
    gold: &Path,
    name: SnapshotName<'_>,
    ctx: &RunContext,
    value: &T,
) -> Result<PathBuf> {
    fs::create_dir_all(gold).with_context(|| format!("create zone {}", gold.display()))?;
    let path = gold.join(name.file_name(&ctx.date_stamp()));
    write_json(&path, value).with_context(|| format!("write {}", name.prefix()))?;
    Ok(path)
}
