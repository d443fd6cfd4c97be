//! Init command implementation

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use habitmaster::config::Config;

/// Default configuration content for habitmaster init
pub const DEFAULT_CONFIG: &str = r#"# HabitMaster Configuration
# ==========================
#
# All values below are the built-in defaults. Remove a line to keep the
# default, or change it to tune scoring for your group.

# ============================================================================
# SCORING - Points, streak bonus and levels
# ============================================================================
#
#   points_per_level           - Points per level band; level = points / band + 1
#   streak_bonus_interval_days - Streak length that earns one bonus milestone
#   streak_bonus_percent       - Bonus per milestone, percent of the habit's points

[scoring]
points_per_level = 100
streak_bonus_interval_days = 7
streak_bonus_percent = 10

# ============================================================================
# DISPLAY - Command-line front-end
# ============================================================================
#
#   default_habit_file - Habit list (JSON) read when --habits is not given

[display]
default_habit_file = "habits.json"
"#;

/// Write a default configuration file
pub fn init_command(work_dir: &Path, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    // Default to the project-local config path
    let config_path = config_path.unwrap_or_else(|| Config::local_config_path(work_dir));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    info!(path = %config_path.display(), "wrote default config");
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        init_command(dir.path(), None, false).unwrap();
        assert!(Config::local_config_path(dir.path()).exists());

        assert!(init_command(dir.path(), None, false).is_err());
        assert!(init_command(dir.path(), None, true).is_ok());
    }
}
