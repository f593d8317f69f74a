//! Test-only helpers: scripted input and throwaway run stores.

use std::collections::VecDeque;
use std::io;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::{Answer, Run};
use crate::io::line_source::LineSource;
use crate::io::run_store::RunStore;

/// Build a run from raw tokens. Panics on invalid tokens or length.
pub fn run_of<const N: usize>(tokens: [&str; N]) -> Run {
    let answers = tokens
        .iter()
        .map(|token| Answer::parse(token).expect("valid token"))
        .collect();
    Run::new(answers).expect("complete run")
}

/// Line source that replays a fixed queue of lines, then reports end of input.
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Run store in a temporary directory that is removed on drop.
pub struct TempStore {
    _dir: TempDir,
    store: RunStore,
}

impl TempStore {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let store = RunStore::new(dir.path().join("answers.json"));
        Ok(Self { _dir: dir, store })
    }

    pub fn store(&self) -> &RunStore {
        &self.store
    }
}
