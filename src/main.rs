mod cli;
mod config;
mod models;
mod store;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use store::AttendanceStore;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // First run: write the defaults so the knobs are discoverable
    if !AppConfig::config_path()?.exists() {
        config.save().context("Writing default config")?;
    }

    AppConfig::ensure_data_dir()?;
    let store_path = AppConfig::attendance_path()?;
    let mut store = AttendanceStore::open(store_path);

    // All date-keyed operations are anchored to the local calendar day,
    // resolved once here so every handler agrees on what "today" is.
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Toggle { prayer, date }) => {
            handlers::handle_toggle(&mut store, &prayer, date.as_deref(), today)?;
        }
        Some(Commands::Day { date }) => {
            handlers::handle_day(&store, &config, date.as_deref(), today)?;
        }
        Some(Commands::Week) => {
            handlers::handle_week(&store, &config, today)?;
        }
        Some(Commands::Month { back }) => {
            handlers::handle_month(&store, back, today)?;
        }
        Some(Commands::Streak) => {
            handlers::handle_streak(&store, today)?;
        }
        Some(Commands::Export) => {
            handlers::handle_export(&store)?;
        }

        // No subcommand: show today's checklist
        None => {
            handlers::handle_day(&store, &config, None, today)?;
        }
    }

    Ok(())
}
