//! Points calculation
//!
//! Each completion earns the habit's point value. Every full streak
//! milestone (7 days by default) adds a bonus of a percent of the point value
//! (10% by default). The bonus is derived from the current streak on every
//! call and is never stored.
//!
//! Amounts are tracked in hundredths of a point so percent bonuses stay exact;
//! the grand total is floored once at the end.

use chrono::NaiveDate;

use super::streaks::current_streak;
use crate::config::ScoringRules;
use crate::domain::Habit;

/// Point contribution of a single habit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitPoints {
    /// Completions times point value
    pub base: u64,
    /// Streak bonus in hundredths of a point
    pub bonus_hundredths: u64,
}

impl HabitPoints {
    /// Base plus bonus, in hundredths of a point
    pub fn total_hundredths(&self) -> u64 {
        self.base * 100 + self.bonus_hundredths
    }

    /// Streak bonus as a fractional point value
    pub fn bonus(&self) -> f64 {
        self.bonus_hundredths as f64 / 100.0
    }
}

/// Streak bonus for a streak length, in hundredths of a point
pub fn streak_bonus_hundredths(streak: u32, points: u32, rules: &ScoringRules) -> u64 {
    let milestones = u64::from(streak / rules.streak_bonus_interval_days.max(1));
    milestones * u64::from(points) * u64::from(rules.streak_bonus_percent)
}

/// Points earned by one habit as of `today`
pub fn habit_points(habit: &Habit, today: NaiveDate, rules: &ScoringRules) -> HabitPoints {
    let streak = current_streak(&habit.completed_dates, today);
    HabitPoints {
        base: habit.completion_count() as u64 * u64::from(habit.points),
        bonus_hundredths: streak_bonus_hundredths(streak, habit.points, rules),
    }
}

/// Total points over all habits, floored to a whole number
pub fn total_points(habits: &[Habit], today: NaiveDate, rules: &ScoringRules) -> u32 {
    let hundredths: u64 = habits
        .iter()
        .map(|h| habit_points(h, today, rules).total_hundredths())
        .sum();
    u32::try_from(hundredths / 100).unwrap_or(u32::MAX)
}

/// Total number of completions across all habits
pub fn total_completions(habits: &[Habit]) -> usize {
    habits.iter().map(Habit::completion_count).sum()
}
