//! Level system
//!
//! Levels are fixed-width bands of points: level = floor(points / band) + 1.

use crate::config::ScoringRules;

/// Level for a point total (always at least 1)
pub fn level(total_points: u32, rules: &ScoringRules) -> u32 {
    (total_points / rules.points_per_level.max(1)).saturating_add(1)
}

/// Points accrued inside the current level band
pub fn level_progress(total_points: u32, rules: &ScoringRules) -> u32 {
    total_points % rules.points_per_level.max(1)
}

/// Points still needed to reach the next level
pub fn points_to_next_level(total_points: u32, rules: &ScoringRules) -> u32 {
    rules.points_per_level.max(1) - level_progress(total_points, rules)
}

/// Level view derived from a point total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelInfo {
    pub total_points: u32,
    pub level: u32,
    /// Points inside the current band
    pub progress: u32,
    /// Points needed for the next level
    pub remaining: u32,
}

impl LevelInfo {
    pub fn new(total_points: u32, rules: &ScoringRules) -> Self {
        Self {
            total_points,
            level: level(total_points, rules),
            progress: level_progress(total_points, rules),
            remaining: points_to_next_level(total_points, rules),
        }
    }

    /// Progress to next level (0.0 - 1.0)
    pub fn progress_fraction(&self) -> f32 {
        let band = self.progress + self.remaining;
        if band == 0 {
            0.0
        } else {
            self.progress as f32 / band as f32
        }
    }
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelUp {
    /// Compare two levels, yielding an event only on promotion
    pub fn between(old_level: u32, new_level: u32) -> Option<Self> {
        (new_level > old_level).then_some(Self {
            old_level,
            new_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        let rules = ScoringRules::default();
        assert_eq!(level(0, &rules), 1);
        assert_eq!(level(99, &rules), 1);
        assert_eq!(level(100, &rules), 2);
        assert_eq!(level(250, &rules), 3);
    }

    #[test]
    fn test_progress_and_remaining() {
        let rules = ScoringRules::default();
        assert_eq!(level_progress(0, &rules), 0);
        assert_eq!(level_progress(250, &rules), 50);
        assert_eq!(points_to_next_level(250, &rules), 50);
        assert_eq!(points_to_next_level(300, &rules), 100);
    }

    #[test]
    fn test_level_info() {
        let info = LevelInfo::new(275, &ScoringRules::default());
        assert_eq!(info.level, 3);
        assert_eq!(info.progress, 75);
        assert_eq!(info.remaining, 25);
        assert!((info.progress_fraction() - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_custom_band_width() {
        let rules = ScoringRules {
            points_per_level: 40,
            ..ScoringRules::default()
        };
        assert_eq!(level(100, &rules), 3);
        assert_eq!(level_progress(100, &rules), 20);
    }

    #[test]
    fn test_level_up_only_on_promotion() {
        assert_eq!(
            LevelUp::between(2, 3),
            Some(LevelUp {
                old_level: 2,
                new_level: 3
            })
        );
        assert_eq!(LevelUp::between(3, 3), None);
        assert_eq!(LevelUp::between(3, 2), None);
    }

    #[test]
    fn test_level_saturates_at_point_cap() {
        let rules = ScoringRules {
            points_per_level: 1,
            ..ScoringRules::default()
        };
        assert_eq!(level(u32::MAX, &rules), u32::MAX);
        assert_eq!(level_progress(u32::MAX, &rules), 0);
        assert_eq!(LevelInfo::new(u32::MAX, &rules).remaining, 1);
    }
}
