//! Streak calculation
//!
//! A streak is the number of consecutive calendar days with a completion.
//! The current streak stays alive while the latest completion is today or
//! yesterday, so a user has until the end of today to extend it.

use chrono::{Days, Local, NaiveDate};

use crate::domain::{CompletionRecord, Habit};

/// Today's local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}

/// Current streak as of `today`.
///
/// Anchored on today if completed today, otherwise on yesterday. Returns 0
/// when the latest completion is older than yesterday (or after today).
pub fn current_streak(dates: &CompletionRecord, today: NaiveDate) -> u32 {
    let Some(latest) = dates.latest() else {
        return 0;
    };

    let yesterday = previous_day(today);
    if latest != today && Some(latest) != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut expected = previous_day(latest);
    for date in dates.iter().rev().skip(1) {
        if Some(date) != expected {
            break;
        }
        streak += 1;
        expected = previous_day(date);
    }

    streak
}

/// Longest run of consecutive days anywhere in the record
pub fn max_streak(dates: &CompletionRecord) -> u32 {
    let mut days = dates.iter();
    let Some(first) = days.next() else {
        return 0;
    };

    let mut best = 1;
    let mut run = 1;
    let mut prev = first;
    for date in days {
        if (date - prev).num_days() == 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
        prev = date;
    }

    best
}

/// Streak values derived for one habit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    pub last_completed: Option<NaiveDate>,
}

impl StreakInfo {
    /// Compute streak values for a record as of `today`
    pub fn for_record(dates: &CompletionRecord, today: NaiveDate) -> Self {
        Self {
            current: current_streak(dates, today),
            best: max_streak(dates),
            last_completed: dates.latest(),
        }
    }

    /// Check if the streak is still alive (completion today or yesterday)
    pub fn is_active(&self) -> bool {
        self.current > 0
    }
}

/// Streak values for a habit, keyed by habit id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStreak {
    pub habit_id: String,
    pub streak: StreakInfo,
}

/// Recompute the streak of every habit from scratch
pub fn refresh_streaks(habits: &[Habit], today: NaiveDate) -> Vec<HabitStreak> {
    habits
        .iter()
        .map(|habit| HabitStreak {
            habit_id: habit.id.clone(),
            streak: StreakInfo::for_record(&habit.completed_dates, today),
        })
        .collect()
}
