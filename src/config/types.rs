use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the terminal demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Counter value the store starts from (default: 0).
    #[serde(default)]
    pub initial_value: i64,

    /// Milliseconds between event-loop ticks (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// When enabled, any mouse press in the terminal dispatches an
    /// increment, independent of the keyboard triggers (default: off).
    #[serde(default)]
    pub click_anywhere_increments: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Config {
    /// Tick rate as a `Duration` for the event loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: 0,
            tick_rate_ms: default_tick_rate_ms(),
            click_anywhere_increments: false,
        }
    }
}
