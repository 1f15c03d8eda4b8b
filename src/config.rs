use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{
    app_dirs::AppDirs, difficulty::DifficultyLevel, problem::Operation, session::SessionConfig,
};

/// Start-up defaults for the front end, stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub operation: String,
    pub difficulty: u8,
    pub reset_delay_ms: u64,
    pub advance_on_invalid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::Add.token().to_string(),
            difficulty: DifficultyLevel::MIN,
            reset_delay_ms: 2000,
            advance_on_invalid: true,
        }
    }
}

impl Config {
    /// Unknown tokens resolve to addition
    pub fn operation(&self) -> Operation {
        Operation::from_token_or_default(&self.operation)
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        DifficultyLevel::new(self.difficulty).unwrap_or_else(|err| {
            tracing::warn!(%err, "clamping configured difficulty");
            DifficultyLevel::clamped(self.difficulty)
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            reset_delay: Duration::from_millis(self.reset_delay_ms),
            advance_on_invalid: self.advance_on_invalid,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("mathdrill_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "no config file, using defaults");
                return Config::default();
            }
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        tracing::info!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
