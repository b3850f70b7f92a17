//! User API - persistence for a single `User` resource over HTTP.
//!
//! The core is the data-access abstraction: a `UserRepository` contract,
//! a `ConnectionFactory` that picks MySQL or PostgreSQL from a driver
//! name, and the `UserService` façade that HTTP handlers call.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment configuration and constants
//! - **domain**: `User` and `Credential`
//! - **services**: The `UserService` façade
//! - **infra**: Connection factory, connection handle, repositories
//! - **api**: HTTP handlers, routes and state
//! - **types**: Response bodies
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against MySQL
//! DB_DRIVER=mysql cargo run -- serve
//!
//! # Check that PostgreSQL answers
//! cargo run -- ping --driver postgresql
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credential, User};
pub use errors::{AppError, AppResult};
pub use infra::{ConnectionFactory, Database, Driver};
pub use services::UserService;
