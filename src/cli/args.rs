//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Values given
//! here override the ones loaded from the environment.

use clap::{Args, Parser, Subcommand};

/// User API - CRUD over a users table on MySQL or PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "user-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Open a connection and check that the database answers
    Ping(DriverArgs),
}

/// Database driver selection shared by commands that connect
#[derive(Args, Debug, Default)]
pub struct DriverArgs {
    /// Database driver: mysql or postgresql
    #[arg(short, long)]
    pub driver: Option<String>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DriverArgs,

    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}
