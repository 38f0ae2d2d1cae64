//! Logger and resolver startup.

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use crate::resolver::DigResolver;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain
/// text (with colors and emojis) and a JSON line format for structured
/// logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default;
/// the provided `level` overrides it, which keeps `RUST_LOG=debug` usable
/// for quick debugging while `--log-level` stays authoritative.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger was already
/// installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("dnssec_survey", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so tests that initialize the logger repeatedly get an
    // error instead of a panic.
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Locates the external resolution tool on the PATH.
///
/// A missing tool is a startup-class failure: the whole run aborts before
/// any probing begins, as opposed to a single query failing, which is
/// retried.
pub fn init_resolver() -> Result<Arc<DigResolver>, InitializationError> {
    let resolver = DigResolver::locate()?;
    Ok(Arc::new(resolver))
}
