//! Configuration constants.
//!
//! Operational parameters for the probing pipeline: concurrency ceiling,
//! retry policy, and output defaults.

use std::time::Duration;

/// Number of concurrent probe workers (fixed at startup, never resized).
///
/// Each in-flight probe holds one external `dig` subprocess, so this is
/// also the ceiling on concurrent subprocess invocations.
pub const WORKER_COUNT: usize = 100;

/// Maximum number of resolution attempts per domain (including the first).
///
/// Exhausting the budget yields an empty answer, which downstream treats
/// as "not supported" rather than an error.
pub const RETRY_MAX_ATTEMPTS: usize = 10;

/// Fixed delay between failed resolution attempts. No jitter, no
/// exponential growth: the external resolver tends to fail on load spikes
/// and recovers within a second.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Placeholder written into string fields of unsupported results so every
/// output row is fully populated.
pub const UNSUPPORTED_PLACEHOLDER: &str = "nil";

/// Name of the external resolution tool looked up on the PATH at startup.
pub const RESOLVER_BINARY: &str = "dig";

/// Default input file (rank,domain CSV without a header row).
pub const DEFAULT_INPUT_PATH: &str = "top-1m.csv";

/// Default output file for the aggregated results table.
pub const DEFAULT_OUTPUT_PATH: &str = "results.csv";
