//! I/O helpers for questionnaire commands.

pub mod config;
pub mod line_source;
pub mod run_store;
