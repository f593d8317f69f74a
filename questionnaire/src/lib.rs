//! Interactive yes/no questionnaire with a durable run history.
//!
//! Each invocation asks the fixed question catalog, appends the completed
//! run to an append-only store, and reports the affirmative rating for the
//! run and for every run recorded so far. The architecture keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (answer parsing, run invariants,
//!   ratings). No I/O.
//! - **[`io`]**: Side-effecting operations (line input, the run store, config
//!   files). Isolated behind small types and traits so tests can swap them.
//!
//! Orchestration modules ([`collect`], [`survey`], [`report`]) coordinate core
//! logic with I/O to implement CLI commands.

pub mod collect;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod survey;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
