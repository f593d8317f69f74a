//! Shared deterministic types for the questionnaire.
//!
//! These types define the contracts between the collector, the run store and
//! the rating calculator. They hold no I/O and enforce the run invariant at
//! construction (and deserialization) time.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fixed yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
}

/// The compiled-in question catalog. Order defines answer order in a [`Run`].
pub const QUESTIONS: [Question; 5] = [
    Question {
        id: "q1",
        prompt: "Can you code in Ruby?",
    },
    Question {
        id: "q2",
        prompt: "Can you code in JavaScript?",
    },
    Question {
        id: "q3",
        prompt: "Can you code in Swift?",
    },
    Question {
        id: "q4",
        prompt: "Can you code in Java?",
    },
    Question {
        id: "q5",
        prompt: "Can you code in C#?",
    },
];

/// Normalized answer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    #[serde(alias = "y")]
    Yes,
    #[serde(alias = "n")]
    No,
}

/// Raw input outside the accepted token set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid answer '{raw}'")]
pub struct InvalidAnswer {
    pub raw: String,
}

impl Answer {
    /// Parse raw user input: trims surrounding whitespace, ignores case, and
    /// accepts `yes`, `y`, `no`, `n`.
    pub fn parse(raw: &str) -> Result<Self, InvalidAnswer> {
        match raw.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            _ => Err(InvalidAnswer {
                raw: raw.to_string(),
            }),
        }
    }

    pub fn is_affirmative(self) -> bool {
        self == Answer::Yes
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => f.write_str("yes"),
            Answer::No => f.write_str("no"),
        }
    }
}

/// A run whose length does not match the question catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("run has {actual} answers, expected {expected}")]
pub struct RunLengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// One complete set of answers, one per question in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct Run(Vec<Answer>);

impl Run {
    pub fn new(answers: Vec<Answer>) -> Result<Self, RunLengthMismatch> {
        if answers.len() != QUESTIONS.len() {
            return Err(RunLengthMismatch {
                expected: QUESTIONS.len(),
                actual: answers.len(),
            });
        }
        Ok(Self(answers))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn affirmative_count(&self) -> usize {
        self.0.iter().filter(|answer| answer.is_affirmative()).count()
    }
}

impl TryFrom<Vec<Answer>> for Run {
    type Error = RunLengthMismatch;

    fn try_from(answers: Vec<Answer>) -> Result<Self, Self::Error> {
        Run::new(answers)
    }
}

impl From<Run> for Vec<Answer> {
    fn from(run: Run) -> Self {
        run.0
    }
}

/// Ordered, append-only history of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunLog(Vec<Run>);

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, run: Run) {
        self.0.push(run);
    }

    pub fn runs(&self) -> &[Run] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Run> {
        self.0.last()
    }
}

impl FromIterator<Run> for RunLog {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
