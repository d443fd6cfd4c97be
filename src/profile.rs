//! Profile aggregation
//!
//! Merges engine output into the user-facing profile summary. This is the one
//! place that carries state forward between refreshes: the max streak never
//! drops below the value the profile already had.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringRules;
use crate::domain::Habit;
use crate::engine::{
    global_current_streak, global_max_streak, level, total_completions, total_points, LevelInfo,
    LevelUp,
};

/// Gamification fields of a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_points: u32,
    pub level: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    #[serde(default)]
    pub total_completions: u32,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
            current_streak: 0,
            max_streak: 0,
            total_completions: 0,
        }
    }
}

/// Result of refreshing a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub stats: ProfileStats,
    pub level_info: LevelInfo,
    /// Set when the refresh moved the profile to a higher level
    pub level_up: Option<LevelUp>,
}

impl ProfileStats {
    /// Recompute the profile from the full habit list
    pub fn refresh(
        previous: &ProfileStats,
        habits: &[Habit],
        today: NaiveDate,
        rules: &ScoringRules,
    ) -> ProfileUpdate {
        let total_points = total_points(habits, today, rules);
        let computed_max = global_max_streak(habits);

        let stats = ProfileStats {
            total_points,
            level: level(total_points, rules),
            current_streak: global_current_streak(habits, today),
            max_streak: computed_max.max(previous.max_streak),
            total_completions: u32::try_from(total_completions(habits)).unwrap_or(u32::MAX),
        };

        debug!(
            habits = habits.len(),
            points = stats.total_points,
            level = stats.level,
            current_streak = stats.current_streak,
            max_streak = stats.max_streak,
            computed_max,
            "refreshed profile"
        );

        ProfileUpdate {
            stats,
            level_info: LevelInfo::new(total_points, rules),
            level_up: LevelUp::between(previous.level, stats.level),
        }
    }
}
