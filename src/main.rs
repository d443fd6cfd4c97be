use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "habitmaster")]
#[command(about = "HabitMaster - streaks, points and levels for your habits")]
#[command(version)]
struct Cli {
    /// Path to the habit list (JSON, defaults to display.default_habit_file)
    #[arg(long, global = true)]
    habits: Option<PathBuf>,

    /// Path to the config file (defaults to .habitmaster/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, level and global streaks
    Summary {
        /// Max streak already stored in the profile
        #[arg(long, default_value_t = 0)]
        previous_max: u32,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show current and best streak for each habit
    Streaks,

    /// Show achievement progress
    Achievements {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show completion progress for the day
    Today,

    /// Rank users from a JSON list of {name, totalPoints}
    Leaderboard {
        /// Path to the entries file
        entries: PathBuf,
    },

    /// Initialize a new .habitmaster/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = PathBuf::from(".");
    let context = || {
        cli::Context::load(
            cli.config.as_deref(),
            cli.habits.as_deref(),
            cli.today.as_deref(),
            &work_dir,
        )
    };

    match cli.command {
        Some(Commands::Summary { previous_max, json }) => {
            cli::summary::summary_command(&context()?, previous_max, json)?;
        }
        Some(Commands::Streaks) => {
            cli::streaks::streaks_command(&context()?)?;
        }
        Some(Commands::Achievements { json }) => {
            cli::achievements::achievements_command(&context()?, json)?;
        }
        Some(Commands::Today) => {
            cli::today::today_command(&context()?)?;
        }
        Some(Commands::Leaderboard { entries }) => {
            cli::leaderboard::leaderboard_command(&entries)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, cli.config.clone(), force)?;
        }
        None => {
            // Default: show the summary
            cli::summary::summary_command(&context()?, 0, false)?;
        }
    }

    Ok(())
}
