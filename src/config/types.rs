//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::MAX_ENTRIES;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How comparison results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Apex line followed by indented subdomains, one section per result
    Text,
    /// A single JSON object with counts and all four sections
    Json,
}

/// Which result section(s) to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Every section
    All,
    /// Domains only in list A
    OnlyA,
    /// Domains only in list B
    OnlyB,
    /// Domains present in both lists
    Both,
    /// Union of both lists
    Combined,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, but can equally be constructed
/// programmatically by library users.
///
/// # Examples
///
/// ```no_run
/// use domain_list_filter::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     list_a: PathBuf::from("a.txt"),
///     list_b: PathBuf::from("b.txt"),
///     max_entries: 1000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_list_filter",
    about = "Cleans up two domain lists, groups them by apex domain, and compares them"
)]
pub struct Config {
    /// File with the first domain list (use '-' for stdin)
    #[arg(value_name = "LIST_A")]
    pub list_a: PathBuf,

    /// File with the second domain list (use '-' for stdin)
    #[arg(value_name = "LIST_B")]
    pub list_b: PathBuf,

    /// Maximum number of non-blank lines considered per list
    #[arg(long, default_value_t = MAX_ENTRIES)]
    pub max_entries: usize,

    /// Output format for the comparison results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Result section to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Log per-list processing statistics (accepted, duplicates, rejected)
    #[arg(long)]
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_a: PathBuf::from("list_a.txt"),
            list_b: PathBuf::from("list_b.txt"),
            max_entries: MAX_ENTRIES,
            output_format: OutputFormat::Text,
            section: Section::All,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            show_stats: false,
        }
    }
}
