//! Deterministic, pure logic for the questionnaire.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! answers and runs and return deterministic outputs suitable for tests.

pub mod rating;
pub mod types;
