//! Achievement checking logic
//!
//! Contains functions to check which achievements are unlocked and how far
//! along the locked ones are.

use chrono::{Datelike, NaiveDate, Weekday};

use super::definitions::{Achievement, AchievementCategory, AchievementId, ACHIEVEMENTS};
use crate::config::ScoringRules;
use crate::domain::{CompletionRecord, Habit};
use crate::engine::{
    global_max_streak, max_streak, total_completions, total_points, union_of, DailyProgress,
};

/// Counters the achievements are checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementInputs {
    pub max_streak: u32,
    pub habit_count: u32,
    pub total_points: u32,
    pub total_completions: u32,
    pub weekend_completion: bool,
    /// Longest run of consecutive days on which every habit was done
    pub perfect_days: u32,
}

impl AchievementInputs {
    /// Derive counters from the habit list as of `today`
    pub fn from_habits(habits: &[Habit], today: NaiveDate, rules: &ScoringRules) -> Self {
        let weekend_completion = union_of(habits)
            .iter()
            .any(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun));

        Self {
            max_streak: global_max_streak(habits),
            habit_count: u32::try_from(habits.len()).unwrap_or(u32::MAX),
            total_points: total_points(habits, today, rules),
            total_completions: u32::try_from(total_completions(habits)).unwrap_or(u32::MAX),
            weekend_completion,
            perfect_days: max_streak(&perfect_days(habits)),
        }
    }

    fn counter_for(&self, achievement: &Achievement) -> u32 {
        match achievement.category {
            AchievementCategory::Streak => self.max_streak,
            AchievementCategory::Habits => self.habit_count,
            AchievementCategory::Points => self.total_points,
            AchievementCategory::Completions => self.total_completions,
            AchievementCategory::Time => u32::from(self.weekend_completion),
            AchievementCategory::Perfect => self.perfect_days,
        }
    }
}

/// Days on which every habit in the list was completed
fn perfect_days(habits: &[Habit]) -> CompletionRecord {
    union_of(habits)
        .iter()
        .filter(|day| DailyProgress::for_day(habits, *day).is_complete())
        .collect()
}

/// Progress of one achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementProgress {
    pub id: AchievementId,
    /// Counter value, capped at the target
    pub progress: u32,
    pub target: u32,
    pub unlocked: bool,
}

impl AchievementProgress {
    pub fn remaining(&self) -> u32 {
        self.target - self.progress
    }
}

/// Progress for every defined achievement
pub fn evaluate(inputs: &AchievementInputs) -> Vec<AchievementProgress> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            let counter = inputs.counter_for(achievement);
            AchievementProgress {
                id: achievement.id,
                progress: counter.min(achievement.target),
                target: achievement.target,
                unlocked: counter >= achievement.target,
            }
        })
        .collect()
}

/// Achievements reached by `inputs` that are not in `unlocked` yet
pub fn newly_unlocked(inputs: &AchievementInputs, unlocked: &[String]) -> Vec<AchievementId> {
    evaluate(inputs)
        .into_iter()
        .filter(|p| p.unlocked && !unlocked.iter().any(|code| code == p.id.as_str()))
        .map(|p| p.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn progress_of(all: &[AchievementProgress], id: AchievementId) -> AchievementProgress {
        *all.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_nothing_unlocked_at_start() {
        let all = evaluate(&AchievementInputs::default());
        assert_eq!(all.len(), ACHIEVEMENTS.len());
        assert!(all.iter().all(|p| !p.unlocked && p.progress == 0));
    }

    #[test]
    fn test_streak_medals_follow_max_streak() {
        let inputs = AchievementInputs {
            max_streak: 23,
            ..AchievementInputs::default()
        };
        let all = evaluate(&inputs);

        assert!(progress_of(&all, AchievementId::Streak7).unlocked);
        assert!(progress_of(&all, AchievementId::Streak14).unlocked);

        let month = progress_of(&all, AchievementId::Streak30);
        assert!(!month.unlocked);
        assert_eq!(month.progress, 23);
        assert_eq!(month.remaining(), 7);
    }

    #[test]
    fn test_progress_is_capped_at_target() {
        let inputs = AchievementInputs {
            total_points: 1247,
            ..AchievementInputs::default()
        };
        let all = evaluate(&inputs);
        assert_eq!(progress_of(&all, AchievementId::Points100).progress, 100);
        assert_eq!(progress_of(&all, AchievementId::Points5000).progress, 1247);
    }

    #[test]
    fn test_newly_unlocked_skips_known_codes() {
        let inputs = AchievementInputs {
            max_streak: 14,
            total_completions: 12,
            ..AchievementInputs::default()
        };
        let known = vec!["streak_7".to_string(), "first_completion".to_string()];

        let fresh = newly_unlocked(&inputs, &known);
        assert_eq!(
            fresh,
            vec![AchievementId::Streak14, AchievementId::TenCompletions]
        );
    }

    #[test]
    fn test_inputs_from_habits() {
        // 2025-10-11 is a Saturday
        let sat = NaiveDate::from_ymd_opt(2025, 10, 11).unwrap();
        let mon = NaiveDate::from_ymd_opt(2025, 10, 13).unwrap();
        let habits = vec![
            Habit::new("a", "Read", 10).with_completions([sat, mon].into_iter().collect()),
        ];

        let inputs = AchievementInputs::from_habits(&habits, mon, &ScoringRules::default());
        assert!(inputs.weekend_completion);
        assert_eq!(inputs.total_completions, 2);
        assert_eq!(inputs.total_points, 20);
        assert_eq!(inputs.max_streak, 1);
        assert_eq!(inputs.habit_count, 1);
        assert_eq!(inputs.perfect_days, 1);
    }

    #[test]
    fn test_habit_count_milestones() {
        let habits: Vec<Habit> = (0..6)
            .map(|i| Habit::new(i.to_string(), format!("Habit {i}"), 10))
            .collect();
        let inputs = AchievementInputs::from_habits(&habits, day(15), &ScoringRules::default());
        assert_eq!(inputs.habit_count, 6);

        let all = evaluate(&inputs);
        assert!(progress_of(&all, AchievementId::Habits5).unlocked);
        let ten = progress_of(&all, AchievementId::Habits10);
        assert!(!ten.unlocked);
        assert_eq!(ten.remaining(), 4);
    }

    #[test]
    fn test_perfect_week_needs_every_habit_every_day() {
        let week: CompletionRecord = (9..=15).map(day).collect();
        let mut partial: CompletionRecord = (9..=15).map(day).collect();
        partial.remove(day(12));

        let habits = vec![
            Habit::new("a", "Read", 10).with_completions(week.clone()),
            Habit::new("b", "Run", 20).with_completions(week),
        ];
        let inputs = AchievementInputs::from_habits(&habits, day(15), &ScoringRules::default());
        assert_eq!(inputs.perfect_days, 7);
        assert!(newly_unlocked(&inputs, &[]).contains(&AchievementId::PerfectWeek));

        // One missed day on the second habit splits the run into 3 + 3
        let habits = vec![
            habits[0].clone(),
            Habit::new("b", "Run", 20).with_completions(partial),
        ];
        let inputs = AchievementInputs::from_habits(&habits, day(15), &ScoringRules::default());
        assert_eq!(inputs.perfect_days, 3);
        assert!(!newly_unlocked(&inputs, &[]).contains(&AchievementId::PerfectWeek));
    }

    #[test]
    fn test_upper_completion_and_streak_tiers() {
        let inputs = AchievementInputs {
            max_streak: 100,
            total_completions: 156,
            ..AchievementInputs::default()
        };
        let all = evaluate(&inputs);
        assert!(progress_of(&all, AchievementId::Streak100).unlocked);
        assert!(progress_of(&all, AchievementId::HundredCompletions).unlocked);

        let champion = progress_of(&all, AchievementId::FiveHundredCompletions);
        assert!(!champion.unlocked);
        assert_eq!(champion.progress, 156);
    }
}
