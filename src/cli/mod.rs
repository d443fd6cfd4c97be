//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod leaderboard;
pub mod streaks;
pub mod summary;
pub mod today;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use tracing::debug;

use habitmaster::config::Config;
use habitmaster::{engine, load_habits, parse_completion_date, Habit};

/// Inputs shared by the reporting commands
pub struct Context {
    pub config: Config,
    pub today: NaiveDate,
    pub habits_path: PathBuf,
}

impl Context {
    /// Resolve config, evaluation date and habit list location
    pub fn load(
        config_path: Option<&Path>,
        habits_path: Option<&Path>,
        today: Option<&str>,
        work_dir: &Path,
    ) -> Result<Self> {
        let config = Config::load(config_path, work_dir)?;

        let today = match today {
            Some(value) => parse_completion_date(value).context("Invalid --today value")?,
            None => engine::today(),
        };

        let habits_path = match habits_path {
            Some(path) => path.to_path_buf(),
            None => work_dir.join(&config.display.default_habit_file),
        };

        debug!(today = %today, habits = %habits_path.display(), "resolved context");
        Ok(Self {
            config,
            today,
            habits_path,
        })
    }

    /// Read the habit list
    pub fn habits(&self) -> Result<Vec<Habit>> {
        load_habits(&self.habits_path)
            .with_context(|| format!("Failed to load habits: {}", self.habits_path.display()))
    }
}
