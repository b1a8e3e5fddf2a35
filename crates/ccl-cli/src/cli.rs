//! CLI argument definitions for the contact-list cleaning toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ccl",
    version,
    about = "Contact-list cleaning toolkit",
    long_about = "Clean and deduplicate contact-list CSV exports.\n\n\
                  `clean` normalizes first names and drops rows whose email fails\n\
                  third-party validation; `dedupe` removes rows whose LinkedIn\n\
                  profile already appears in a master export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw email addresses in log output (PII; redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize first names and drop rows with undeliverable emails.
    Clean(CleanArgs),

    /// Remove rows whose LinkedIn profile is already in the master export.
    Dedupe(DedupeArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV files to clean. With no files, prompts interactively and
    /// resolves names against the downloads directory.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory interactive prompts resolve filenames against
    /// (default: ~/Downloads).
    #[arg(long = "downloads-dir", value_name = "DIR")]
    pub downloads_dir: Option<PathBuf>,

    /// Abstract API key (overrides the ABSTRACT_API_KEY environment
    /// variable).
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,
}

#[derive(Parser)]
pub struct DedupeArgs {
    /// CSV file to dedupe. Prompted for interactively when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Master export to dedupe against (default: the people export in
    /// the downloads directory).
    #[arg(long = "master", value_name = "FILE")]
    pub master: Option<PathBuf>,

    /// Directory interactive prompts resolve filenames against
    /// (default: ~/Downloads).
    #[arg(long = "downloads-dir", value_name = "DIR")]
    pub downloads_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
