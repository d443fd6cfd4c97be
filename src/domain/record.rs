//! Completion records
//!
//! A record is the set of calendar days on which a habit was completed.
//! Days are stored as `NaiveDate` in a `BTreeSet`, so they are unique and
//! always sorted. On the wire they are `YYYY-MM-DD` strings.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HabitError;

/// Wire format of a completion date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a completion date.
///
/// Accepts `YYYY-MM-DD` or a full timestamp such as `2025-10-15T08:30:00.000Z`,
/// which is truncated to its date portion.
pub fn parse_completion_date(value: &str) -> Result<NaiveDate, HabitError> {
    let day = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, DATE_FORMAT).map_err(|source| HabitError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Format a date as its `YYYY-MM-DD` key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Set of days on which a habit was completed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionRecord {
    dates: BTreeSet<NaiveDate>,
}

impl CompletionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from date strings, rejecting the first malformed one
    pub fn parse<I, S>(values: I) -> Result<Self, HabitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = values
            .into_iter()
            .map(|v| parse_completion_date(v.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { dates })
    }

    /// Union of several records (a day counts once however many records hold it)
    pub fn union<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CompletionRecord>,
    {
        let dates = records
            .into_iter()
            .flat_map(|r| r.dates.iter().copied())
            .collect();
        Self { dates }
    }

    /// Add a day. Returns false if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Remove a day. Returns false if it was not present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Most recent completion day
    pub fn latest(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Days in ascending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Days within `start..=end` (empty when `start > end`)
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        (start <= end)
            .then(|| self.dates.range(start..=end))
            .into_iter()
            .flatten()
            .copied()
    }
}

impl<'de> Deserialize<'de> for CompletionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Self::parse(&values).map_err(serde::de::Error::custom)
    }
}

impl FromIterator<NaiveDate> for CompletionRecord {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
