//! Derivation engine: streaks, points, levels and achievements
//!
//! Every function here is a pure transformation of habit data. Nothing is
//! cached or stored; callers re-run the engine whenever completions change
//! and merge the results into their own state.
//!
//! The current date is always an explicit argument. Use [`today`] for the
//! local calendar date.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use habitmaster::config::ScoringRules;
//! use habitmaster::domain::{CompletionRecord, Habit};
//! use habitmaster::engine::{current_streak, level, total_points};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
//! let record = CompletionRecord::parse(["2025-10-13", "2025-10-14", "2025-10-15"]).unwrap();
//! assert_eq!(current_streak(&record, today), 3);
//!
//! let rules = ScoringRules::default();
//! let habits = vec![Habit::new("1", "Read", 10).with_completions(record)];
//! let points = total_points(&habits, today, &rules);
//! assert_eq!(points, 30);
//! assert_eq!(level(points, &rules), 1);
//! ```

pub mod achievements;
mod global;
mod levels;
mod points;
mod progress;
mod streaks;

pub use global::{global_current_streak, global_max_streak, union_of};
pub use levels::{level, level_progress, points_to_next_level, LevelInfo, LevelUp};
pub use points::{
    habit_points, streak_bonus_hundredths, total_completions, total_points, HabitPoints,
};
pub use progress::{completions_in_week, week_bounds, DailyProgress, WeeklyProgress};
pub use streaks::{current_streak, max_streak, refresh_streaks, today, HabitStreak, StreakInfo};
