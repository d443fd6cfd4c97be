use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::CompletionRecord;

/// A recurring habit and its completion history
///
/// Field names follow the habit list format used by the client
/// (`completedDates`, `points`, `frequency`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Points awarded per completion
    #[serde(default = "default_points")]
    pub points: u32,
    /// Target completions per week
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    #[serde(default)]
    pub completed_dates: CompletionRecord,
}

fn default_points() -> u32 {
    10
}

fn default_frequency() -> u32 {
    7
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            points,
            frequency: default_frequency(),
            completed_dates: CompletionRecord::new(),
        }
    }

    /// Builder-style helper for setting the completion record
    pub fn with_completions(mut self, record: CompletionRecord) -> Self {
        self.completed_dates = record;
        self
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(date)
    }

    /// Mark or unmark a day.
    ///
    /// Returns true if the habit is completed on `date` afterwards.
    pub fn toggle_completion(&mut self, date: NaiveDate) -> bool {
        if self.completed_dates.remove(date) {
            false
        } else {
            self.completed_dates.insert(date)
        }
    }

    pub fn completion_count(&self) -> usize {
        self.completed_dates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_completion() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let mut habit = Habit::new("1", "Read", 10);

        assert!(habit.toggle_completion(day));
        assert!(habit.is_completed_on(day));
        assert_eq!(habit.completion_count(), 1);

        assert!(!habit.toggle_completion(day));
        assert!(!habit.is_completed_on(day));
        assert_eq!(habit.completion_count(), 0);
    }

    #[test]
    fn test_deserialize_client_format() {
        let json = r#"{
            "id": "1697040000000",
            "name": "Meditar",
            "category": "salud",
            "points": 15,
            "frequency": 5,
            "completedDates": ["2025-10-14", "2025-10-15"],
            "streak": 2
        }"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.points, 15);
        assert_eq!(habit.frequency, 5);
        assert_eq!(habit.category.as_deref(), Some("salud"));
        assert_eq!(habit.completion_count(), 2);
    }

    #[test]
    fn test_deserialize_defaults() {
        let habit: Habit = serde_json::from_str(r#"{"id": "a", "name": "Walk"}"#).unwrap();
        assert_eq!(habit.points, 10);
        assert_eq!(habit.frequency, 7);
        assert!(habit.completed_dates.is_empty());
    }
}
