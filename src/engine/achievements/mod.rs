//! Achievements: streak medals, habit, point and completion milestones, perfect days
//!
//! Achievements are derived from the same habit data as points and levels.
//! Storing which ones were already announced is left to the caller.

mod checker;
mod definitions;

pub use checker::{evaluate, newly_unlocked, AchievementInputs, AchievementProgress};
pub use definitions::{Achievement, AchievementCategory, AchievementId, ACHIEVEMENTS};
