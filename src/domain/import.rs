//! Read-only import of a habit list exported by the client

use std::path::Path;

use serde::de::DeserializeOwned;

use super::habit::Habit;
use crate::error::HabitError;

/// Parse a JSON array of habits
pub fn habits_from_json(content: &str) -> Result<Vec<Habit>, HabitError> {
    from_json(content)
}

/// Read a JSON array of habits from disk
pub fn load_habits(path: &Path) -> Result<Vec<Habit>, HabitError> {
    load_json(path)
}

/// Read any JSON document from disk
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, HabitError> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

fn from_json<T: DeserializeOwned>(content: &str) -> Result<T, HabitError> {
    Ok(serde_json::from_str(content)?)
}
