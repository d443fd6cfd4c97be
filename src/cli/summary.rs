//! Summary command implementation

use anyhow::Result;

use habitmaster::profile::ProfileStats;

use super::Context;

/// Show the profile summary derived from the habit list
pub fn summary_command(ctx: &Context, previous_max: u32, json: bool) -> Result<()> {
    let habits = ctx.habits()?;
    let previous = ProfileStats {
        max_streak: previous_max,
        ..ProfileStats::default()
    };

    let update = ProfileStats::refresh(&previous, &habits, ctx.today, &ctx.config.scoring);
    let stats = update.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let info = update.level_info;
    println!("Profile as of {}:\n", ctx.today);
    println!("  Level {} ({} points)", info.level, info.total_points);
    println!(
        "  Progress: {}/{} ({} to next level)",
        info.progress,
        info.progress + info.remaining,
        info.remaining
    );
    println!("  Current streak: {} days", stats.current_streak);
    println!("  Max streak: {} days", stats.max_streak);
    println!(
        "  Completions: {} across {} habits",
        stats.total_completions,
        habits.len()
    );

    Ok(())
}
