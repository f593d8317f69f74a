//! Interactive collection of one run of answers.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::core::types::{Answer, Question, Run, RunLengthMismatch};
use crate::io::line_source::LineSource;

/// Shown after any answer outside the accepted token set.
pub const INVALID_ANSWER_MESSAGE: &str =
    "Invalid answer. Please respond with 'Yes', 'No', 'Y', or 'N'.";

/// Fatal failure while collecting a run. Invalid answers are not errors here;
/// they are reprompted.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("input ended before question {question_id} was answered")]
    InputExhausted { question_id: &'static str },
    #[error("read answer for question {question_id}")]
    Read {
        question_id: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("write prompt")]
    Prompt(#[source] io::Error),
    /// The catalog passed in differs in size from [`QUESTIONS`](crate::core::types::QUESTIONS).
    #[error(transparent)]
    Incomplete(#[from] RunLengthMismatch),
}

/// Ask every question in order, reprompting until each answer is valid.
///
/// Returns a complete [`Run`]; if input runs out first, nothing partial is
/// returned.
pub fn collect_answers<S, W>(
    questions: &[Question],
    source: &mut S,
    out: &mut W,
) -> Result<Run, CollectError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let mut answers = Vec::with_capacity(questions.len());
    for question in questions {
        answers.push(ask(question, source, out)?);
    }
    Ok(Run::new(answers)?)
}

fn ask<S, W>(question: &Question, source: &mut S, out: &mut W) -> Result<Answer, CollectError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        write!(out, "{} (Yes/No): ", question.prompt).map_err(CollectError::Prompt)?;
        out.flush().map_err(CollectError::Prompt)?;

        let line = source
            .next_line()
            .map_err(|err| CollectError::Read {
                question_id: question.id,
                source: err,
            })?
            .ok_or(CollectError::InputExhausted {
                question_id: question.id,
            })?;

        match Answer::parse(&line) {
            Ok(answer) => {
                debug!(question = question.id, %answer, "answer accepted");
                return Ok(answer);
            }
            Err(err) => {
                debug!(question = question.id, raw = %err.raw, "answer rejected");
                writeln!(out, "{INVALID_ANSWER_MESSAGE}").map_err(CollectError::Prompt)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::QUESTIONS;
    use crate::test_support::{ScriptedLines, run_of};

    #[test]
    fn collects_one_answer_per_question_in_order() {
        let mut source = ScriptedLines::new(["yes", "No", " y ", "N", "YES"]);
        let mut out: Vec<u8> = Vec::new();

        let run = collect_answers(&QUESTIONS, &mut source, &mut out).expect("collect");
        assert_eq!(run, run_of(["yes", "no", "y", "n", "yes"]));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn invalid_answers_reprompt_the_same_question() {
        let mut source = ScriptedLines::new([
            "maybe", "", "yes", // q1
            "no", // q2
            "1", "2", "3", "y", // q3
            "n",  // q4
            "nah", "n", // q5
        ]);
        let mut out: Vec<u8> = Vec::new();

        let run = collect_answers(&QUESTIONS, &mut source, &mut out).expect("collect");
        assert_eq!(run, run_of(["yes", "no", "y", "n", "n"]));

        let printed = String::from_utf8(out).expect("utf8");
        assert_eq!(printed.matches(INVALID_ANSWER_MESSAGE).count(), 6);
        assert_eq!(printed.matches("Can you code in Ruby? (Yes/No): ").count(), 3);
        assert_eq!(printed.matches("Can you code in Swift? (Yes/No): ").count(), 4);
        assert_eq!(printed.matches("Can you code in Java? (Yes/No): ").count(), 1);
    }

    #[test]
    fn prompts_are_written_in_catalog_order() {
        let mut source = ScriptedLines::new(["y"; 5]);
        let mut out: Vec<u8> = Vec::new();
        collect_answers(&QUESTIONS, &mut source, &mut out).expect("collect");

        let printed = String::from_utf8(out).expect("utf8");
        let expected: String = QUESTIONS
            .iter()
            .map(|question| format!("{} (Yes/No): ", question.prompt))
            .collect();
        assert_eq!(printed, expected);
    }

    #[test]
    fn exhausted_input_fails_without_a_partial_run() {
        let mut source = ScriptedLines::new(["yes", "no", "bogus"]);
        let mut out: Vec<u8> = Vec::new();

        let err = collect_answers(&QUESTIONS, &mut source, &mut out).expect_err("exhausted");
        assert!(matches!(
            err,
            CollectError::InputExhausted { question_id: "q3" }
        ));
    }

    #[test]
    fn empty_input_fails_on_first_question() {
        let mut source = ScriptedLines::new(Vec::<String>::new());
        let mut out: Vec<u8> = Vec::new();

        let err = collect_answers(&QUESTIONS, &mut source, &mut out).expect_err("exhausted");
        assert!(matches!(
            err,
            CollectError::InputExhausted { question_id: "q1" }
        ));
    }

    #[test]
    fn catalog_size_mismatch_is_reported() {
        let mut source = ScriptedLines::new(["y", "n"]);
        let mut out: Vec<u8> = Vec::new();

        let err = collect_answers(&QUESTIONS[..2], &mut source, &mut out).expect_err("short");
        assert!(matches!(
            err,
            CollectError::Incomplete(RunLengthMismatch {
                expected: 5,
                actual: 2
            })
        ));
    }
}
