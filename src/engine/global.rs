//! Streaks across all habits
//!
//! A day counts toward the global streak if any habit was completed on it.

use chrono::NaiveDate;

use super::streaks::{current_streak, max_streak};
use crate::domain::{CompletionRecord, Habit};

/// Deduplicated union of every habit's completion days
pub fn union_of(habits: &[Habit]) -> CompletionRecord {
    CompletionRecord::union(habits.iter().map(|h| &h.completed_dates))
}

/// Current streak over the union of all habits
pub fn global_current_streak(habits: &[Habit], today: NaiveDate) -> u32 {
    current_streak(&union_of(habits), today)
}

/// Longest streak over the union of all habits
pub fn global_max_streak(habits: &[Habit]) -> u32 {
    max_streak(&union_of(habits))
}
