//! Yes/no questionnaire CLI.
//!
//! Asks the fixed question catalog, records the run in the store
//! (`answers.json` by default), and prints the run and overall ratings.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use questionnaire::collect::CollectError;
use questionnaire::core::types::QUESTIONS;
use questionnaire::exit_codes;
use questionnaire::io::config::{DEFAULT_CONFIG_FILE, load_config};
use questionnaire::io::line_source::ReaderLines;
use questionnaire::io::run_store::{RunStore, StorageError};
use questionnaire::logging;
use questionnaire::report::report_from_store;
use questionnaire::survey::run_survey;

#[derive(Parser)]
#[command(
    name = "questionnaire",
    version,
    about = "Ask a fixed set of yes/no questions and track the yes rating across runs"
)]
struct Cli {
    /// Run store file (overrides `store_path` from the config file).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Config file [default: questionnaire.toml, if present].
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Answer the questions, record the run, and print ratings (default).
    Run,
    /// Print the overall rating without asking anything.
    Report,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let store = open_store(&cli)?;
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => cmd_run(&store),
        Command::Report => cmd_report(&store),
    }
}

fn open_store(cli: &Cli) -> Result<RunStore> {
    let config_path = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config {} not found", path.display());
            }
            path.clone()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    let mut config = load_config(&config_path).context("load config")?;
    if let Some(store) = &cli.store {
        config.store_path = store.clone();
        config.validate().context("--store")?;
    }
    debug!(store = %config.store_path.display(), "using run store");
    Ok(RunStore::new(config.store_path))
}

fn cmd_run(store: &RunStore) -> Result<()> {
    let mut source = ReaderLines::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    run_survey(&QUESTIONS, store, &mut source, &mut out)?;
    Ok(())
}

fn cmd_report(store: &RunStore) -> Result<()> {
    let summary = report_from_store(store)?;
    println!("Overall rating for all runs: {}%", summary.overall);
    println!("Runs recorded: {}", summary.runs);
    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<StorageError>() {
            return exit_codes::STORAGE;
        }
        if let Some(CollectError::InputExhausted { .. }) = cause.downcast_ref::<CollectError>() {
            return exit_codes::INPUT_EXHAUSTED;
        }
    }
    exit_codes::INVALID
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::survey::SurveyError;

    #[test]
    fn parse_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["questionnaire"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.store, None);
    }

    #[test]
    fn parse_report_with_global_store() {
        let cli = Cli::parse_from(["questionnaire", "report", "--store", "runs.json"]);
        assert_eq!(cli.command, Some(Command::Report));
        assert_eq!(cli.store, Some(PathBuf::from("runs.json")));
    }

    #[test]
    fn storage_failures_map_to_storage_code() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("bad json");
        let err = anyhow::Error::from(SurveyError::Storage(StorageError::Parse {
            path: PathBuf::from("answers.json"),
            source,
        }));
        assert_eq!(exit_code_for(&err), exit_codes::STORAGE);
    }

    #[test]
    fn exhausted_input_maps_to_input_code() {
        let err = anyhow::Error::from(SurveyError::Collect(CollectError::InputExhausted {
            question_id: "q2",
        }));
        assert_eq!(exit_code_for(&err), exit_codes::INPUT_EXHAUSTED);
    }

    #[test]
    fn other_failures_map_to_invalid_code() {
        let err = anyhow::anyhow!("config broken");
        assert_eq!(exit_code_for(&err), exit_codes::INVALID);
    }
}
