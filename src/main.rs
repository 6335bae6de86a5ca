//! tally - a terminal counter driven by one observable store.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tally::config::Config;
use tally::counter::{CounterReducer, CounterState};
use tally::flux::SharedStore;
use tally::logging::init_tracing;
use tally::ui;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A terminal counter driven by one observable store", long_about = None)]
struct Cli {
    /// Config file path (default: the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting value for the counter
    #[arg(short, long)]
    initial: Option<i64>,

    /// Milliseconds between event-loop ticks
    #[arg(long)]
    tick_rate_ms: Option<u64>,

    /// Dispatch an increment on any mouse click
    #[arg(long)]
    click_anywhere: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = resolve_config(&cli).context("Failed to load configuration")?;
    tracing::debug!(?config, "resolved configuration");

    let store = build_store(&config);
    ui::runtime::run(store, &config).context("Terminal UI error")?;

    Ok(())
}

/// Load the config file, fold in command-line overrides, and validate
/// the combined result.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(initial) = cli.initial {
        config.initial_value = initial;
    }
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.tick_rate_ms = tick_rate_ms;
    }
    if cli.click_anywhere {
        config.click_anywhere_increments = true;
    }
}

/// Build the demo store. A zero start goes through the reducer's
/// bootstrap path; anything else seeds the state directly.
fn build_store(config: &Config) -> SharedStore<CounterReducer> {
    if config.initial_value == 0 {
        SharedStore::new()
    } else {
        SharedStore::with_state(CounterState::new(config.initial_value))
    }
}
