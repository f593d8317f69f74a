//! Stable exit codes for questionnaire CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config, failed terminal I/O, or other errors.
pub const INVALID: i32 = 1;
/// The run store could not be read, parsed, or written.
pub const STORAGE: i32 = 2;
/// Input ended before every question was answered.
pub const INPUT_EXHAUSTED: i32 = 3;
