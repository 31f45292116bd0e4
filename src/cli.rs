// src/cli.rs
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "A CLI tool to plan and log gym sessions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print command output as CSV instead of a table where supported
    #[arg(long, global = true)]
    pub export_csv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseTypeCli {
    Compound,
    Isolation,
    Cardio,
    Stretching,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitsCli {
    Metric,
    Imperial,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageCli {
    English,
    Swedish,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account (and log it in)
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log in with an existing account
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log the current user out
    Logout,
    /// Show the logged-in user's profile
    Profile,
    /// Change email and/or username of the logged-in user
    EditProfile {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Delete the logged-in account and all its data
    DeleteAccount {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List the exercise catalog
    ListExercises {
        /// Filter by exercise type
        #[arg(long, value_enum)]
        type_: Option<ExerciseTypeCli>,
        /// Filter by muscle group (e.g. "chest", "quads"; matches primary or secondary)
        #[arg(long)]
        muscle: Option<String>,
    },
    /// Search the catalog by name (case-insensitive substring)
    SearchExercises {
        term: String,
    },
    /// Start an interactive workout session
    Start,
    /// List past workout sessions
    History {
        /// Show only the last N sessions
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
        /// Show the exercises and sets of one session instead
        #[arg(long, conflicts_with = "limit")]
        session: Option<i64>,
    },
    /// Add a training goal
    AddGoal {
        #[arg(short, long)]
        title: String,
        /// Target value, e.g. 100 for "100 kg"
        #[arg(long)]
        target: f64,
        /// Unit of the target, e.g. "kg", "km", "workouts"
        #[arg(long)]
        unit: String,
        /// Optional target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List your goals
    ListGoals,
    /// Update a goal
    UpdateGoal {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        target: Option<f64>,
        /// New current progress value
        #[arg(long)]
        current: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Delete a goal
    DeleteGoal {
        id: i64,
    },
    /// Show lifetime workout statistics
    Stats,
    /// Set the measurement units
    SetUnits {
        #[arg(value_enum)]
        units: UnitsCli,
    },
    /// Set the display language
    SetLanguage {
        #[arg(value_enum)]
        language: LanguageCli,
    },
    /// Show the path to the database file
    DbPath,
    /// Show the path to the config file
    ConfigPath,
    /// Generate shell completion scripts
    GenerateCompletion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

// Function to parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

// Function to get the command structure (for completion generation)
pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
