//! Today command implementation

use anyhow::Result;

use habitmaster::engine::{DailyProgress, WeeklyProgress};

use super::Context;

/// Show which habits are done on the evaluation day
pub fn today_command(ctx: &Context) -> Result<()> {
    let habits = ctx.habits()?;
    let day = DailyProgress::for_day(&habits, ctx.today);

    println!(
        "{}: {}/{} habits done ({:.0}%), +{} pts\n",
        ctx.today,
        day.completed,
        day.total,
        day.percentage(),
        day.points_earned
    );

    for habit in &habits {
        let mark = if habit.is_completed_on(ctx.today) { "x" } else { " " };
        let week = WeeklyProgress::for_habit(habit, ctx.today);
        println!(
            "  [{}] {} ({}/{} this week)",
            mark, habit.name, week.completed, week.target
        );
    }

    if day.is_complete() {
        println!("\nAll habits done for today.");
    }

    Ok(())
}
