//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod ping;
pub mod serve;

use crate::cli::args::DriverArgs;
use crate::config::Config;

/// Let `--driver` take precedence over `DB_DRIVER`.
fn apply_driver(args: &DriverArgs, config: &mut Config) {
    if let Some(driver) = &args.driver {
        config.driver = driver.clone();
    }
}
