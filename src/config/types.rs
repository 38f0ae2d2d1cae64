//! Configuration types and CLI options.
//!
//! This module defines the structs and enums used for command-line argument
//! parsing and programmatic configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, WORKER_COUNT};

/// Logging level for the application.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
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
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Survey configuration, parsed from the command line or constructed
/// programmatically.
///
/// # Examples
///
/// ```no_run
/// use dnssec_survey::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("top-1m.csv"),
///     workers: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dnssec_survey",
    about = "Probes a ranked domain list for DNSSEC adoption via RRSIG records"
)]
pub struct Config {
    /// CSV file with the domains to probe (rank,domain per row, no header)
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub file: PathBuf,

    /// Output CSV file for the aggregated results table
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of concurrent probe workers
    #[arg(long, default_value_t = WORKER_COUNT)]
    pub workers: usize,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            workers: WORKER_COUNT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_from(["dnssec_survey"]);
        assert_eq!(config.file, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.workers, WORKER_COUNT);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
    }

    #[test]
    fn test_config_flags() {
        let config = Config::parse_from([
            "dnssec_survey",
            "domains.csv",
            "--output",
            "out.csv",
            "--workers",
            "8",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ]);
        assert_eq!(config.file, PathBuf::from("domains.csv"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.workers, 8);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let from_cli = Config::parse_from(["dnssec_survey"]);
        let programmatic = Config::default();
        assert_eq!(from_cli.file, programmatic.file);
        assert_eq!(from_cli.output, programmatic.output);
        assert_eq!(from_cli.workers, programmatic.workers);
    }
}
