//! Orchestration for one questionnaire invocation.
//!
//! A survey collects a complete run, appends it to the store, prints the
//! run's rating, then reloads the full log and prints the overall rating.
//! An incomplete run never reaches the store.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::collect::{CollectError, collect_answers};
use crate::core::rating::{Percentage, rating_of};
use crate::core::types::{Question, Run};
use crate::io::line_source::LineSource;
use crate::io::run_store::{RunStore, StorageError};
use crate::report::{ReportSummary, summarize};

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("collect answers")]
    Collect(#[from] CollectError),
    #[error("run store")]
    Storage(#[from] StorageError),
    #[error("write rating")]
    Output(#[source] io::Error),
}

/// Result of a completed survey.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyOutcome {
    pub run: Run,
    pub run_rating: Percentage,
    pub summary: ReportSummary,
}

/// Run the full collect, persist, rate, and report sequence.
#[instrument(skip_all, fields(store = %store.path().display()))]
pub fn run_survey<S, W>(
    questions: &[Question],
    store: &RunStore,
    source: &mut S,
    out: &mut W,
) -> Result<SurveyOutcome, SurveyError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let run = collect_answers(questions, source, out)?;
    store.append(run.clone())?;

    let run_rating = rating_of(&run);
    writeln!(out, "Your rating for this run: {run_rating}%").map_err(SurveyError::Output)?;

    let log = store.load_all()?;
    let summary = summarize(&log);
    debug!(runs = summary.runs, overall = %summary.overall, "survey complete");
    writeln!(out, "Overall rating for all runs: {}%", summary.overall)
        .map_err(SurveyError::Output)?;

    Ok(SurveyOutcome {
        run,
        run_rating,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::QUESTIONS;
    use crate::test_support::{ScriptedLines, TempStore, run_of};

    #[test]
    fn survey_prints_run_and_overall_ratings() {
        let temp = TempStore::new().expect("store");
        let mut source = ScriptedLines::new(["yes", "no", "y", "n", "yes"]);
        let mut out: Vec<u8> = Vec::new();

        let outcome =
            run_survey(&QUESTIONS, temp.store(), &mut source, &mut out).expect("survey");
        assert_eq!(outcome.run, run_of(["yes", "no", "y", "n", "yes"]));
        assert_eq!(outcome.run_rating.value(), 60.0);
        assert_eq!(outcome.summary.runs, 1);
        assert_eq!(outcome.summary.overall.value(), 60.0);

        let printed = String::from_utf8(out).expect("utf8");
        // Prompts carry no newline, so the run rating shares the last prompt's line.
        assert!(printed.ends_with(
            "Can you code in C#? (Yes/No): Your rating for this run: 60.0%\n\
             Overall rating for all runs: 60.0%\n"
        ));
    }

    #[test]
    fn overall_rating_includes_previous_runs() {
        let temp = TempStore::new().expect("store");
        temp.store()
            .append(run_of(["yes", "no", "y", "n", "yes"]))
            .expect("seed");

        let mut source = ScriptedLines::new(["yes", "yes", "yes", "yes", "no"]);
        let mut out: Vec<u8> = Vec::new();
        let outcome =
            run_survey(&QUESTIONS, temp.store(), &mut source, &mut out).expect("survey");

        assert_eq!(outcome.run_rating.value(), 80.0);
        assert_eq!(outcome.summary.overall.value(), 70.0);
        assert_eq!(outcome.summary.runs, 2);
    }

    #[test]
    fn exhausted_input_persists_nothing() {
        let temp = TempStore::new().expect("store");
        let mut source = ScriptedLines::new(["yes", "no"]);
        let mut out: Vec<u8> = Vec::new();

        let err = run_survey(&QUESTIONS, temp.store(), &mut source, &mut out)
            .expect_err("exhausted");
        assert!(matches!(
            err,
            SurveyError::Collect(CollectError::InputExhausted { .. })
        ));
        assert!(!temp.store().path().exists());
        assert!(temp.store().load_all().expect("load").is_empty());
    }

    #[test]
    fn corrupt_store_fails_after_collection() {
        let temp = TempStore::new().expect("store");
        std::fs::write(temp.store().path(), "not json").expect("corrupt");
        let mut source = ScriptedLines::new(["y"; 5]);
        let mut out: Vec<u8> = Vec::new();

        let err = run_survey(&QUESTIONS, temp.store(), &mut source, &mut out)
            .expect_err("storage");
        assert!(matches!(err, SurveyError::Storage(_)));
        let printed = String::from_utf8(out).expect("utf8");
        assert!(!printed.contains("Your rating"));
    }
}
