//! Durable run log stored as a single JSON document.
//!
//! The document holds one key, `runs`, mapping to the ordered list of runs.
//! Every mutation is a read-modify-write of the whole document, committed by
//! writing a temp file and renaming it over the store.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::types::{Run, RunLog};

/// Failure reading or writing the run store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read run store {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse run store {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialize run log")]
    Serialize(#[source] serde_json::Error),
    #[error("write run store {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    runs: RunLog,
}

/// Append-only run log backed by one file.
#[derive(Debug, Clone)]
pub struct RunStore {
    path: PathBuf,
}

impl RunStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `run` to the log in one transaction.
    pub fn append(&self, run: Run) -> Result<(), StorageError> {
        let total = self.transaction(|log| {
            log.push(run);
            log.len()
        })?;
        info!(path = %self.path.display(), runs = total, "run appended");
        Ok(())
    }

    /// Load every stored run. A store that does not exist yet is an empty log.
    pub fn load_all(&self) -> Result<RunLog, StorageError> {
        Ok(self.read_document()?.runs)
    }

    /// Read the current log, apply `update`, and commit the result atomically.
    ///
    /// Nothing is written if reading fails, and a failed write leaves the
    /// previous document in place.
    fn transaction<T>(&self, update: impl FnOnce(&mut RunLog) -> T) -> Result<T, StorageError> {
        let mut document = self.read_document()?;
        let output = update(&mut document.runs);
        self.write_document(&document)?;
        Ok(output)
    }

    fn read_document(&self) -> Result<StoreDocument, StorageError> {
        debug!(path = %self.path.display(), "loading run store");
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "run store missing, starting empty");
                return Ok(StoreDocument::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let document: StoreDocument =
            serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(runs = document.runs.len(), "run store loaded");
        Ok(document)
    }

    fn write_document(&self, document: &StoreDocument) -> Result<(), StorageError> {
        let mut buf = serde_json::to_string_pretty(document).map_err(StorageError::Serialize)?;
        buf.push('\n');
        write_atomic(&self.path, &buf).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = temp_path(path);
    fs::write(&tmp_path, contents)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
