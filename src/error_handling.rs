//! Error types and per-category probe error counters.

use std::collections::HashMap;
use std::process::ExitStatus;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::SetLoggerError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for startup failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The external resolution tool could not be located on the PATH.
    /// Unrecoverable: without it no probe can run.
    #[error("resolution tool `{0}` not found on the PATH")]
    ResolverNotFound(String),
}

/// Error from a single resolution attempt.
///
/// These are transient: the retry loop in
/// [`resolve_with_retry`](crate::resolver::resolve_with_retry) absorbs
/// them, so they never propagate past the Resolver Client.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The subprocess could not be spawned or its output not collected.
    #[error("failed to run `{tool}` for {domain}: {source}")]
    Invocation {
        /// Tool that was invoked.
        tool: String,
        /// Domain being queried.
        domain: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran but exited with a failure status.
    #[error("`{tool}` exited with {status} for {domain}")]
    QueryFailed {
        /// Tool that was invoked.
        tool: String,
        /// Domain being queried.
        domain: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Soft failure categories observed while probing.
///
/// None of these abort a probe; they are counted and reported at the end
/// of the run for operator visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// A single resolution attempt failed and was retried.
    ResolveAttemptError,
    /// All resolution attempts for a domain were exhausted.
    ResolveExhaustedError,
    /// A captured RRSIG field failed integer coercion and defaulted to 0.
    FieldCoercionError,
}

impl ErrorType {
    /// Human-readable label used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ResolveAttemptError => "Resolution attempt error",
            ErrorType::ResolveExhaustedError => "Resolution retries exhausted",
            ErrorType::FieldCoercionError => "RRSIG field coercion error",
        }
    }
}

/// Thread-safe counters for soft probe failures.
///
/// Shared across all workers via `Arc`; every [`ErrorType`] is initialized
/// to zero on creation.
pub struct ProbeStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProbeStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ProbeStats { errors }
    }

    /// Bumps the counter for one error category.
    pub fn increment(&self, error: ErrorType) {
        // All ErrorType variants are initialized in new(), so unwrap() is safe
        self.errors
            .get(&error)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for one error category.
    pub fn get_count(&self, error: ErrorType) -> usize {
        // All ErrorType variants are initialized in new(), so unwrap() is safe
        self.errors.get(&error).unwrap().load(Ordering::SeqCst)
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        ErrorType::iter().map(|e| self.get_count(e)).sum()
    }
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_stats_initialization() {
        let stats = ProbeStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_count(error_type), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_probe_stats_increment() {
        let stats = ProbeStats::new();
        stats.increment(ErrorType::ResolveAttemptError);
        assert_eq!(stats.get_count(ErrorType::ResolveAttemptError), 1);
        assert_eq!(stats.get_count(ErrorType::FieldCoercionError), 0);
    }

    #[test]
    fn test_probe_stats_multiple_increments() {
        let stats = ProbeStats::new();
        stats.increment(ErrorType::FieldCoercionError);
        stats.increment(ErrorType::FieldCoercionError);
        stats.increment(ErrorType::ResolveExhaustedError);
        assert_eq!(stats.get_count(ErrorType::FieldCoercionError), 2);
        assert_eq!(stats.total(), 3);
    }
}
