//! Configuration for the demo binary.
//!
//! A TOML file at `<config_dir>/tally/config.toml`; a missing file is not
//! an error, defaults apply. CLI arguments override file values.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
