//! Aggregate report over the stored run log.

use crate::core::rating::{Percentage, overall_rating};
use crate::core::types::RunLog;
use crate::io::run_store::{RunStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub runs: usize,
    pub overall: Percentage,
}

pub fn summarize(log: &RunLog) -> ReportSummary {
    ReportSummary {
        runs: log.len(),
        overall: overall_rating(log),
    }
}

/// Load the store and summarize it without collecting a new run.
pub fn report_from_store(store: &RunStore) -> Result<ReportSummary, StorageError> {
    let log = store.load_all()?;
    Ok(summarize(&log))
}
