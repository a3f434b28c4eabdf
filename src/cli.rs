// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_plan_path;

/// Command-line arguments for `termplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "termplan",
    version,
    about = "Balance courses into semesters while respecting prerequisites.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Termplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_plan_path())]
    pub plan: PathBuf,

    /// Override `[limits].target_credits`.
    #[arg(long, value_name = "N")]
    pub target_credits: Option<u32>,

    /// Override `[limits].max_credits`.
    #[arg(long, value_name = "N")]
    pub max_credits: Option<u32>,

    /// Override `[limits].max_hours`.
    #[arg(long, value_name = "N")]
    pub max_hours: Option<u32>,

    /// Fail instead of warning when some course cannot be scheduled.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TERMPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate and print the plan, but don't balance it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
