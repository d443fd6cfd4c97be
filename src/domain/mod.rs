//! Core domain types for HabitMaster

mod habit;
mod import;
mod record;

pub use habit::Habit;
pub use import::{habits_from_json, load_habits, load_json};
pub use record::{date_key, parse_completion_date, CompletionRecord, DATE_FORMAT};
