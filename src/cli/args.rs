use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jamaah",
    version,
    about = "A terminal companion for tracking mosque prayer attendance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Toggle a prayer's mosque attendance mark
    Toggle {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Day to toggle, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one day's attendance checklist
    Day {
        /// Day to show, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the last week as an attendance grid
    Week,
    /// Show a month's attendance heatmap and percentage
    Month {
        /// Months back from the current one (0 = this month)
        #[arg(long, default_value_t = 0)]
        back: u32,
    },
    /// Show current and perfect streaks
    Streak,
    /// Print the raw attendance records as JSON
    Export,
}
