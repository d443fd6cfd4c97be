//! Daily and weekly progress views

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::{CompletionRecord, Habit};

/// Completion state of all habits on one day
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
    /// Point values of the habits completed that day (no streak bonus)
    pub points_earned: u32,
}

impl DailyProgress {
    pub fn for_day(habits: &[Habit], day: NaiveDate) -> Self {
        let done: Vec<&Habit> = habits.iter().filter(|h| h.is_completed_on(day)).collect();
        let points: u64 = done.iter().map(|h| u64::from(h.points)).sum();
        Self {
            completed: done.len(),
            total: habits.len(),
            points_earned: u32::try_from(points).unwrap_or(u32::MAX),
        }
    }

    /// Percentage of habits completed (0 when there are no habits)
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 * 100.0 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Monday and Sunday of the ISO week containing `reference`
pub fn week_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(reference.weekday().num_days_from_monday());
    let start = reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(reference);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// Completions between Monday and Sunday of `reference`'s week
pub fn completions_in_week(record: &CompletionRecord, reference: NaiveDate) -> u32 {
    let (start, end) = week_bounds(reference);
    record.range(start, end).count() as u32
}

/// Weekly completions of a habit against its frequency target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyProgress {
    pub completed: u32,
    pub target: u32,
}

impl WeeklyProgress {
    pub fn for_habit(habit: &Habit, reference: NaiveDate) -> Self {
        Self {
            completed: completions_in_week(&habit.completed_dates, reference),
            target: habit.frequency,
        }
    }

    pub fn target_met(&self) -> bool {
        self.completed >= self.target
    }
}
