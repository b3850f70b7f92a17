//! Configuration: environment-driven settings, database driver defaults
//! and the response messages shared by the HTTP layer.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
