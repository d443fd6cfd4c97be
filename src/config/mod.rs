//! Configuration loading and management

mod scoring;

pub use scoring::ScoringRules;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Points, streak bonus and level tuning
    #[serde(default)]
    pub scoring: ScoringRules,

    /// Front-end settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Habit list read when `--habits` is not given
    #[serde(default = "default_habit_file")]
    pub default_habit_file: PathBuf,
}

fn default_habit_file() -> PathBuf {
    PathBuf::from("habits.json")
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_habit_file: default_habit_file(),
        }
    }
}

impl Config {
    /// Get the global config directory path (~/.habitmaster/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".habitmaster")
    }

    /// Get the global config file path (~/.habitmaster/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Project-local config path (.habitmaster/config.toml under `dir`)
    pub fn local_config_path(dir: &Path) -> PathBuf {
        dir.join(".habitmaster").join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .scoring
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration for a working directory.
    ///
    /// Looks for .habitmaster/config.toml in `dir`, then the global config,
    /// and falls back to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local = Self::local_config_path(dir);
        if local.exists() {
            return Self::from_file(&local);
        }

        let global = Self::global_config_path();
        if global.exists() {
            return Self::from_file(&global);
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve configuration from an explicit path or the lookup chain
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(work_dir),
        }
    }
}
