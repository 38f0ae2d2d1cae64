//! dnssec_survey library: concurrent DNSSEC adoption probing.
//!
//! Probes a ranked list of domains for DNSSEC adoption: one DNSSEC-aware
//! DNS query per domain (delegated to the external `dig` tool), RRSIG
//! field extraction from the raw answer text, and aggregation of pass/fail
//! statistics over the whole input set.
//!
//! # Example
//!
//! ```no_run
//! use dnssec_survey::{run_survey, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("top-1m.csv"),
//!     workers: 100,
//!     ..Default::default()
//! };
//!
//! let report = run_survey(config).await?;
//! println!(
//!     "Total: {}, supported: {} ({}%)",
//!     report.total, report.supported, report.support_rate_percent
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! A Tokio runtime, and (for the real resolver) the `dig` tool on the
//! PATH. Tests substitute the resolver through
//! [`run_survey_with_resolver`].

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod pool;
mod resolver;
mod rrsig;
mod sink;
mod source;

// Re-export public API
pub use app::{compute_stats, SurveyStats};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InitializationError, ProbeStats, ResolveError};
pub use models::{DomainEntry, ProbeResult};
pub use resolver::{resolve_with_retry, DigResolver, Resolver};
pub use rrsig::{parse_rrsig, RrsigFields};
pub use run::{run_survey, run_survey_with_resolver, SurveyReport};

// Internal run module (contains the main survey logic)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{compute_stats, print_error_statistics, print_summary};
    use crate::config::Config;
    use crate::error_handling::ProbeStats;
    use crate::initialization::init_resolver;
    use crate::resolver::Resolver;
    use crate::{pool, sink, source};

    /// Results of a completed survey run.
    #[derive(Debug, Clone)]
    pub struct SurveyReport {
        /// Total number of domains probed
        pub total: usize,
        /// Number of domains with an RRSIG record in their answer
        pub supported: usize,
        /// Support rate as a percentage (0 for an empty input)
        pub support_rate_percent: f64,
        /// Path of the written results table
        pub output_path: PathBuf,
        /// Elapsed wall-clock time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a survey with the provided configuration.
    ///
    /// This is the main entry point for the library. It locates the
    /// external resolution tool, reads the domain list, probes every
    /// domain concurrently, writes the results table, and returns summary
    /// statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution tool is missing from the PATH,
    /// the input file cannot be read, the output file cannot be written,
    /// or the worker pool terminates early. Per-domain probe failures are
    /// never errors; they surface as unsupported rows.
    pub async fn run_survey(config: Config) -> Result<SurveyReport> {
        let resolver = init_resolver()?;
        run_survey_with_resolver(config, resolver).await
    }

    /// Runs a survey with an explicit resolver implementation.
    ///
    /// Used by tests to substitute an in-memory resolver; behaves exactly
    /// like [`run_survey`] otherwise.
    pub async fn run_survey_with_resolver(
        config: Config,
        resolver: Arc<dyn Resolver>,
    ) -> Result<SurveyReport> {
        let entries = source::read_domains(&config.file)
            .with_context(|| format!("Failed to load domain list from {}", config.file.display()))?;
        info!(
            "Loaded {} domains from {} ({} workers)",
            entries.len(),
            config.file.display(),
            config.workers
        );

        let probe_stats = Arc::new(ProbeStats::new());
        let start_time = std::time::Instant::now();

        let results = pool::run_pool(
            resolver,
            config.workers,
            entries,
            Arc::clone(&probe_stats),
        )
        .await?;

        sink::write_results(&config.output, &results)
            .with_context(|| format!("Failed to write results to {}", config.output.display()))?;

        let stats = compute_stats(&results);
        print_error_statistics(&probe_stats);
        print_summary(&stats);

        Ok(SurveyReport {
            total: stats.total,
            supported: stats.supported,
            support_rate_percent: stats.support_rate_percent,
            output_path: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
