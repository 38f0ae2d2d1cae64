//! Operator-facing output: progress lines and summary statistics.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{compute_stats, print_error_statistics, print_summary, SurveyStats};
