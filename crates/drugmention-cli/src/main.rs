//! Drug mention pipeline CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use drugmention_cli::logging::{LogConfig, LogFormat, init_logging};
use drugmention_cli::pipeline::QueryOutcome;
use drugmention_model::RunContext;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_drugs_by_journal_command, run_ingest_command, run_max_drug_journal_command,
};
use crate::summary::{print_ingest_summary, print_query_outcome};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let ctx = RunContext::now();
    let exit_code = match &cli.command {
        Command::Ingest(args) => match run_ingest_command(args, &ctx) {
            Ok(summary) => {
                print_ingest_summary(&summary);
                i32::from(summary.has_errors())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::MaxDrugJournal(args) => query_exit_code(run_max_drug_journal_command(args, &ctx)),
        Command::DrugsByJournal(args) => query_exit_code(run_drugs_by_journal_command(args, &ctx)),
    };
    std::process::exit(exit_code);
}

fn query_exit_code(result: anyhow::Result<QueryOutcome>) -> i32 {
    match result {
        Ok(outcome) => {
            print_query_outcome(&outcome);
            i32::from(outcome.is_failure())
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
