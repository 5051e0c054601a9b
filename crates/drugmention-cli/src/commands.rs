use std::time::Instant;

use anyhow::Result;
use tracing::info;

use drugmention_cli::config::ZonePaths;
use drugmention_cli::pipeline::{
    IngestSummary, QueryOutcome, run_drugs_by_journal, run_ingest, run_max_drug_journal,
};
use drugmention_model::RunContext;

use crate::cli::{DrugsByJournalArgs, IngestArgs, MaxDrugJournalArgs};

pub fn run_ingest_command(args: &IngestArgs, ctx: &RunContext) -> Result<IngestSummary> {
    let mut zones = ZonePaths::from_env();
    if let Some(dir) = &args.publications_dir {
        zones.publications.clone_from(dir);
    }
    if let Some(dir) = &args.drugs_dir {
        zones.drugs.clone_from(dir);
    }
    if let Some(dir) = &args.silver_zone {
        zones.silver.clone_from(dir);
    }
    if let Some(dir) = &args.trash_zone {
        zones.trash.clone_from(dir);
    }

    let start = Instant::now();
    let summary = run_ingest(&zones, ctx)?;
    info!(duration_ms = start.elapsed().as_millis(), "ingest command finished");
    Ok(summary)
}

pub fn run_max_drug_journal_command(
    args: &MaxDrugJournalArgs,
    ctx: &RunContext,
) -> Result<QueryOutcome> {
    let defaults = ZonePaths::from_env();
    let silver = args.silver_zone.as_ref().unwrap_or(&defaults.silver);
    let gold = args.gold_zone.as_ref().unwrap_or(&defaults.gold);
    run_max_drug_journal(silver, gold, ctx)
}

pub fn run_drugs_by_journal_command(
    args: &DrugsByJournalArgs,
    ctx: &RunContext,
) -> Result<QueryOutcome> {
    let defaults = ZonePaths::from_env();
    let silver = args.silver_zone.as_ref().unwrap_or(&defaults.silver);
    let gold = args.gold_zone.as_ref().unwrap_or(&defaults.gold);
    run_drugs_by_journal(silver, gold, &args.drug, args.source_filter(), ctx)
}
