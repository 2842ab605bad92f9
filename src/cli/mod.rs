//! Command line interface for the Lumen build tools.
//!
//! This module provides argument parsing and command execution for the
//! build steps, with one subcommand per step.

mod args;
pub mod commands;

pub use args::{Args, BundleArgs, Command, FetchToolkitArgs, StampArgs, SyncSourceArgs};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    match args.command {
        Command::Bundle(args) => commands::bundle::run(args).await,
        Command::Stamp(args) => commands::stamp::run(args).await,
        Command::FetchToolkit(args) => commands::fetch_toolkit::run(args).await,
        Command::SyncSource(args) => commands::sync_source::run(args).await,
    }
}
