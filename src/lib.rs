//! HabitMaster - habit tracking gamification core
//!
//! Turns a habit list and its completion history into the numbers a habit
//! tracker shows: per-habit and global streaks, the longest streak ever
//! reached, total points with streak bonuses, level and progress to the next
//! level, plus achievements, daily/weekly progress and leaderboard ordering.
//!
//! ## Layers
//!
//! 1. **Engine** (`engine`): pure functions over completion dates. No I/O,
//!    no stored state, the current date is always passed in.
//!
//! 2. **Profile** (`profile`): merges engine output into a profile summary
//!    and keeps the historical max streak from regressing.
//!
//! Persistence, UI and network sync belong to the host application.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod profile;
pub mod ranking;

pub use domain::*;
pub use error::HabitError;
