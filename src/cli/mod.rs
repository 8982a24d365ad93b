//! CLI module for the roster API
//!
//! A single subcommand for now: `serve` runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Roster API - user accounts, sessions and profiles
#[derive(Parser)]
#[command(name = "roster-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
