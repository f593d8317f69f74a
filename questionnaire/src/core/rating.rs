//! Affirmative-answer ratings for a single run and for the whole log.

use std::fmt;

use crate::core::types::{Run, RunLog};

/// Percentage rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);

    /// Percentage of `part` in `whole`, rounded half away from zero.
    ///
    /// Callers guarantee `whole > 0`.
    fn of(part: usize, whole: usize) -> Self {
        let raw = 100.0 * part as f64 / whole as f64;
        Self((raw * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    // `{:?}` keeps a trailing `.0` for whole numbers (`60.0`, `66.67`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Rating of one run. Runs always hold one answer per question, so the
/// denominator is never zero.
pub fn rating_of(run: &Run) -> Percentage {
    Percentage::of(run.affirmative_count(), run.len())
}

/// Rating across every answer in every stored run. Empty log rates `0.0`.
pub fn overall_rating(log: &RunLog) -> Percentage {
    let total: usize = log.runs().iter().map(Run::len).sum();
    if total == 0 {
        return Percentage::ZERO;
    }
    let affirmative: usize = log.runs().iter().map(Run::affirmative_count).sum();
    Percentage::of(affirmative, total)
}
