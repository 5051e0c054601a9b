//! CLI argument definitions for the drug mention pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Source file the drugs-by-journal query counts by default.
pub const DEFAULT_QUERY_SOURCE_FILE: &str = "pubmed";

#[derive(Parser)]
#[command(
    name = "drugmention",
    version,
    about = "Drug mention pipeline - link drugs to the publications and journals citing them",
    long_about = "Validate publication and drug landing files, cross-reference drug names\n\
                  against publication titles, and query the resulting mentions.\n\n\
                  Zone paths default to the layout under $DRUGMENTION_DATA_DIR (or ./data)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate landing files and build the cross-reference snapshot.
    Ingest(IngestArgs),

    /// Find the journal mentioning the most distinct drugs.
    MaxDrugJournal(MaxDrugJournalArgs),

    /// List the drugs sharing a journal with the given drug.
    DrugsByJournal(DrugsByJournalArgs),
}

#[derive(Args)]
pub struct IngestArgs {
    /// Folder holding clinical_trials.csv, pubmed.csv and pubmed.json.
    #[arg(long = "publications-dir", value_name = "DIR")]
    pub publications_dir: Option<PathBuf>,

    /// Folder holding drugs.csv.
    #[arg(long = "drugs-dir", value_name = "DIR")]
    pub drugs_dir: Option<PathBuf>,

    /// Where validated and cross-referenced snapshots are written.
    #[arg(long = "silver-zone", value_name = "DIR")]
    pub silver_zone: Option<PathBuf>,

    /// Where rejected rows are written.
    #[arg(long = "trash-zone", value_name = "DIR")]
    pub trash_zone: Option<PathBuf>,
}

#[derive(Args)]
pub struct MaxDrugJournalArgs {
    /// Folder holding the cross-reference snapshots.
    #[arg(long = "silver-zone", value_name = "DIR")]
    pub silver_zone: Option<PathBuf>,

    /// Where the result is written.
    #[arg(long = "gold-zone", value_name = "DIR")]
    pub gold_zone: Option<PathBuf>,
}

#[derive(Args)]
pub struct DrugsByJournalArgs {
    /// Drug name, matched case-insensitively.
    #[arg(value_name = "DRUG")]
    pub drug: String,

    /// Folder holding the cross-reference snapshots.
    #[arg(long = "silver-zone", value_name = "DIR")]
    pub silver_zone: Option<PathBuf>,

    /// Where the result is written.
    #[arg(long = "gold-zone", value_name = "DIR")]
    pub gold_zone: Option<PathBuf>,

    /// Only count mentions from this source file.
    #[arg(
        long = "source-file",
        value_name = "NAME",
        default_value = DEFAULT_QUERY_SOURCE_FILE,
        conflicts_with = "all_sources"
    )]
    pub source_file: String,

    /// Count mentions from every source file.
    #[arg(long = "all-sources")]
    pub all_sources: bool,
}

impl DrugsByJournalArgs {
    pub fn source_filter(&self) -> Option<&str> {
        (!self.all_sources).then_some(self.source_file.as_str())
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
