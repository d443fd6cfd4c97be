//! Achievement definitions and metadata
//!
//! All achievements are defined here with their unlock targets and rewards.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Streak medals
    Streak7,
    Streak14,
    Streak30,
    Streak90,
    Streak100,

    // Habit collection
    Habits5,
    Habits10,

    // Points milestones
    Points100,
    Points1000,
    Points5000,

    // Completion milestones
    FirstCompletion,
    TenCompletions,
    FiftyCompletions,
    HundredCompletions,
    FiveHundredCompletions,

    // Time achievements
    WeekendWarrior,

    // Perfect days
    PerfectWeek,
}

impl AchievementId {
    /// Get the stable code used by callers to store unlocked achievements
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streak7 => "streak_7",
            Self::Streak14 => "streak_14",
            Self::Streak30 => "streak_30",
            Self::Streak90 => "streak_90",
            Self::Streak100 => "streak_100",
            Self::Habits5 => "habits_5",
            Self::Habits10 => "habits_10",
            Self::Points100 => "points_100",
            Self::Points1000 => "points_1000",
            Self::Points5000 => "points_5000",
            Self::FirstCompletion => "first_completion",
            Self::TenCompletions => "completions_10",
            Self::FiftyCompletions => "completions_50",
            Self::HundredCompletions => "completions_100",
            Self::FiveHundredCompletions => "completions_500",
            Self::WeekendWarrior => "weekend_warrior",
            Self::PerfectWeek => "perfect_week",
        }
    }

    /// Parse from a stored code
    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::Streak7,
            Self::Streak14,
            Self::Streak30,
            Self::Streak90,
            Self::Streak100,
            Self::Habits5,
            Self::Habits10,
            Self::Points100,
            Self::Points1000,
            Self::Points5000,
            Self::FirstCompletion,
            Self::TenCompletions,
            Self::FiftyCompletions,
            Self::HundredCompletions,
            Self::FiveHundredCompletions,
            Self::WeekendWarrior,
            Self::PerfectWeek,
        ]
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Streak,
    Habits,
    Points,
    Completions,
    Time,
    /// Consecutive days with every habit done
    Perfect,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Streak => "Streaks",
            Self::Habits => "Habits",
            Self::Points => "Points",
            Self::Completions => "Completions",
            Self::Time => "Time",
            Self::Perfect => "Perfect days",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    /// Bonus shown next to the badge; not added to point totals
    pub bonus_points: u32,
    /// Value the tracked counter has to reach
    pub target: u32,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === STREAK ===
    Achievement {
        id: AchievementId::Streak7,
        name: "Week Warrior",
        description: "Keep a habit streak for 7 days",
        category: AchievementCategory::Streak,
        bonus_points: 50,
        target: 7,
    },
    Achievement {
        id: AchievementId::Streak14,
        name: "Fortnight Focus",
        description: "Keep a habit streak for 14 days",
        category: AchievementCategory::Streak,
        bonus_points: 100,
        target: 14,
    },
    Achievement {
        id: AchievementId::Streak30,
        name: "Monthly Master",
        description: "Keep a habit streak for 30 days",
        category: AchievementCategory::Streak,
        bonus_points: 200,
        target: 30,
    },
    Achievement {
        id: AchievementId::Streak90,
        name: "Unstoppable",
        description: "Keep a habit streak for 90 days",
        category: AchievementCategory::Streak,
        bonus_points: 1000,
        target: 90,
    },
    Achievement {
        id: AchievementId::Streak100,
        name: "Legend",
        description: "Keep a habit streak for 100 days",
        category: AchievementCategory::Streak,
        bonus_points: 1000,
        target: 100,
    },
    // === HABITS ===
    Achievement {
        id: AchievementId::Habits5,
        name: "Collector",
        description: "Track 5 different habits",
        category: AchievementCategory::Habits,
        bonus_points: 100,
        target: 5,
    },
    Achievement {
        id: AchievementId::Habits10,
        name: "Habit Master",
        description: "Track 10 different habits",
        category: AchievementCategory::Habits,
        bonus_points: 250,
        target: 10,
    },
    // === POINTS ===
    Achievement {
        id: AchievementId::Points100,
        name: "Centurion",
        description: "Earn 100 points",
        category: AchievementCategory::Points,
        bonus_points: 20,
        target: 100,
    },
    Achievement {
        id: AchievementId::Points1000,
        name: "Point Collector",
        description: "Earn 1000 points",
        category: AchievementCategory::Points,
        bonus_points: 200,
        target: 1000,
    },
    Achievement {
        id: AchievementId::Points5000,
        name: "Point Legend",
        description: "Earn 5000 points",
        category: AchievementCategory::Points,
        bonus_points: 1000,
        target: 5000,
    },
    // === COMPLETIONS ===
    Achievement {
        id: AchievementId::FirstCompletion,
        name: "First Steps",
        description: "Complete a habit for the first time",
        category: AchievementCategory::Completions,
        bonus_points: 10,
        target: 1,
    },
    Achievement {
        id: AchievementId::TenCompletions,
        name: "Getting Started",
        description: "Complete habits 10 times",
        category: AchievementCategory::Completions,
        bonus_points: 30,
        target: 10,
    },
    Achievement {
        id: AchievementId::FiftyCompletions,
        name: "Dedicated",
        description: "Complete habits 50 times",
        category: AchievementCategory::Completions,
        bonus_points: 150,
        target: 50,
    },
    Achievement {
        id: AchievementId::HundredCompletions,
        name: "Relentless",
        description: "Complete habits 100 times",
        category: AchievementCategory::Completions,
        bonus_points: 300,
        target: 100,
    },
    Achievement {
        id: AchievementId::FiveHundredCompletions,
        name: "Champion",
        description: "Complete habits 500 times",
        category: AchievementCategory::Completions,
        bonus_points: 1500,
        target: 500,
    },
    // === TIME ===
    Achievement {
        id: AchievementId::WeekendWarrior,
        name: "Weekend Warrior",
        description: "Complete a habit on a Saturday or Sunday",
        category: AchievementCategory::Time,
        bonus_points: 100,
        target: 1,
    },
    // === PERFECT DAYS ===
    Achievement {
        id: AchievementId::PerfectWeek,
        name: "Perfection",
        description: "Complete every habit on 7 consecutive days",
        category: AchievementCategory::Perfect,
        bonus_points: 500,
        target: 7,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_is_defined_once() {
        for id in AchievementId::all() {
            let defs = ACHIEVEMENTS.iter().filter(|a| a.id == *id).count();
            assert_eq!(defs, 1, "{} defined {} times", id.as_str(), defs);
        }
        assert_eq!(Achievement::total_count(), AchievementId::all().len());
    }

    #[test]
    fn test_codes_parse_back() {
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
        assert_eq!(AchievementId::from_str("medalla_7"), None);
    }

    #[test]
    fn test_every_category_has_entries() {
        let categories = [
            AchievementCategory::Streak,
            AchievementCategory::Habits,
            AchievementCategory::Points,
            AchievementCategory::Completions,
            AchievementCategory::Time,
            AchievementCategory::Perfect,
        ];
        for category in categories {
            assert!(
                ACHIEVEMENTS.iter().any(|a| a.category == category),
                "no achievements in {}",
                category.label()
            );
        }
        assert_eq!(
            Achievement::get(AchievementId::PerfectWeek).map(|a| a.target),
            Some(7)
        );
    }
}
