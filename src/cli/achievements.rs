//! Achievements command implementation

use anyhow::Result;
use serde_json::json;

use habitmaster::engine::achievements::{evaluate, Achievement, AchievementInputs};

use super::Context;

/// Show progress on every achievement
pub fn achievements_command(ctx: &Context, as_json: bool) -> Result<()> {
    let habits = ctx.habits()?;
    let inputs = AchievementInputs::from_habits(&habits, ctx.today, &ctx.config.scoring);
    let progress = evaluate(&inputs);

    if as_json {
        let rows: Vec<_> = progress
            .iter()
            .map(|p| {
                json!({
                    "code": p.id.as_str(),
                    "progress": p.progress,
                    "target": p.target,
                    "unlocked": p.unlocked,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let unlocked = progress.iter().filter(|p| p.unlocked).count();
    println!(
        "Achievements ({}/{} unlocked):\n",
        unlocked,
        Achievement::total_count()
    );

    for p in &progress {
        let Some(achievement) = Achievement::get(p.id) else {
            continue;
        };
        let mark = if p.unlocked { "x" } else { " " };
        println!(
            "  [{}] {} ({}) {}/{} +{} pts",
            mark,
            achievement.name,
            achievement.category.label(),
            p.progress,
            p.target,
            achievement.bonus_points
        );
        println!("      {}", achievement.description);
    }

    Ok(())
}
