//! Scoring rules used by the points and level engines

use serde::{Deserialize, Serialize};

use crate::error::HabitError;

/// Point and level tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Width of one level band in points
    #[serde(default = "default_points_per_level")]
    pub points_per_level: u32,

    /// Streak length (in days) that earns one bonus milestone
    #[serde(default = "default_streak_bonus_interval_days")]
    pub streak_bonus_interval_days: u32,

    /// Bonus per milestone, as a percent of the habit's point value
    #[serde(default = "default_streak_bonus_percent")]
    pub streak_bonus_percent: u32,
}

fn default_points_per_level() -> u32 {
    100
}

fn default_streak_bonus_interval_days() -> u32 {
    7
}

fn default_streak_bonus_percent() -> u32 {
    10
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_level: default_points_per_level(),
            streak_bonus_interval_days: default_streak_bonus_interval_days(),
            streak_bonus_percent: default_streak_bonus_percent(),
        }
    }
}

impl ScoringRules {
    /// Reject values the engines cannot divide by
    pub fn validate(&self) -> Result<(), HabitError> {
        if self.points_per_level == 0 {
            return Err(HabitError::InvalidConfig(
                "scoring.points_per_level must be greater than 0".to_string(),
            ));
        }
        if self.streak_bonus_interval_days == 0 {
            return Err(HabitError::InvalidConfig(
                "scoring.streak_bonus_interval_days must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_level_bands() {
        let rules = ScoringRules::default();
        assert_eq!(rules.points_per_level, 100);
        assert_eq!(rules.streak_bonus_interval_days, 7);
        assert_eq!(rules.streak_bonus_percent, 10);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_divisors() {
        let rules = ScoringRules {
            points_per_level: 0,
            ..ScoringRules::default()
        };
        assert!(matches!(rules.validate(), Err(HabitError::InvalidConfig(_))));

        let rules = ScoringRules {
            streak_bonus_interval_days: 0,
            ..ScoringRules::default()
        };
        assert!(rules.validate().is_err());
    }
}
