//! Questionnaire configuration stored in `questionnaire.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "questionnaire.toml";

/// Questionnaire configuration (TOML).
///
/// Missing fields default to the values in [`QuestionnaireConfig::default`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuestionnaireConfig {
    /// File holding the run log.
    pub store_path: PathBuf,
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("answers.json"),
        }
    }
}

impl QuestionnaireConfig {
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(anyhow!("store_path must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `QuestionnaireConfig::default()`.
pub fn load_config(path: &Path) -> Result<QuestionnaireConfig> {
    if !path.exists() {
        let cfg = QuestionnaireConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QuestionnaireConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
