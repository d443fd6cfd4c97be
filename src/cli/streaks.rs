//! Streaks command implementation

use anyhow::Result;

use habitmaster::date_key;
use habitmaster::engine::{habit_points, refresh_streaks};

use super::Context;

/// Show the current and best streak of every habit
pub fn streaks_command(ctx: &Context) -> Result<()> {
    let habits = ctx.habits()?;

    if habits.is_empty() {
        println!("No habits found.");
        return Ok(());
    }

    println!("Habits ({}):\n", habits.len());

    for (habit, streak) in habits.iter().zip(refresh_streaks(&habits, ctx.today)) {
        let points = habit_points(habit, ctx.today, &ctx.config.scoring);
        let status = if streak.streak.is_active() {
            "active"
        } else {
            "broken"
        };

        println!(
            "  {} [{}] current {} / best {}",
            habit.name, status, streak.streak.current, streak.streak.best
        );
        println!(
            "    {} completions, {} points (+{:.1} streak bonus)",
            habit.completion_count(),
            points.base,
            points.bonus()
        );
        if let Some(last) = streak.streak.last_completed {
            println!("    Last completed: {}", date_key(last));
        }
        println!();
    }

    Ok(())
}
