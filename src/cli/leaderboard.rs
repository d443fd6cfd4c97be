//! Leaderboard command implementation

use anyhow::{Context, Result};
use std::path::Path;

use habitmaster::load_json;
use habitmaster::ranking::{rank, RankEntry};

/// Print entries ordered by points
pub fn leaderboard_command(entries_path: &Path) -> Result<()> {
    let entries: Vec<RankEntry> = load_json(entries_path)
        .with_context(|| format!("Failed to load entries: {}", entries_path.display()))?;

    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    for entry in rank(entries) {
        println!("  {:>3}. {} - {} pts", entry.position, entry.name, entry.total_points);
    }

    Ok(())
}
