//! Resolver client: one DNSSEC-aware query per domain, with retry.
//!
//! The actual wire-level exchange is delegated to the external `dig`
//! tool; this module wraps it behind the [`Resolver`] trait so tests can
//! substitute an in-memory fake without spawning subprocesses.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use log::warn;
use tokio::process::Command;

use crate::config::{RESOLVER_BINARY, RETRY_BACKOFF, RETRY_MAX_ATTEMPTS};
use crate::error_handling::{ErrorType, InitializationError, ProbeStats, ResolveError};

/// A single-attempt DNS resolution capability.
///
/// One call performs one DNSSEC-aware query (type A with the DNSSEC OK
/// flag) and returns the raw textual answer. Retrying lives outside the
/// trait, in [`resolve_with_retry`].
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Performs one query for `domain` and returns the raw answer text.
    async fn resolve(&self, domain: &str) -> Result<String, ResolveError>;
}

/// [`Resolver`] backed by the external `dig` tool.
///
/// The binary is located once at startup; each `resolve` call spawns one
/// subprocess (`dig +dnssec <domain> A`) and captures its stdout.
#[derive(Debug, Clone)]
pub struct DigResolver {
    binary: PathBuf,
}

impl DigResolver {
    /// Searches the process PATH for the `dig` binary.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::ResolverNotFound`] when no
    /// executable candidate exists; callers treat this as whole-run
    /// fatal.
    pub fn locate() -> Result<Self, InitializationError> {
        let path = std::env::var_os("PATH").unwrap_or_default();
        Self::locate_in(std::env::split_paths(&path))
    }

    /// Searches an explicit list of directories instead of the PATH.
    pub fn locate_in(dirs: impl IntoIterator<Item = PathBuf>) -> Result<Self, InitializationError> {
        for dir in dirs {
            let candidate = dir.join(RESOLVER_BINARY);
            if is_executable(&candidate) {
                return Ok(Self { binary: candidate });
            }
        }
        Err(InitializationError::ResolverNotFound(
            RESOLVER_BINARY.to_string(),
        ))
    }

    /// Full path of the located binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

#[async_trait]
impl Resolver for DigResolver {
    async fn resolve(&self, domain: &str) -> Result<String, ResolveError> {
        let output = Command::new(&self.binary)
            .arg("+dnssec")
            .arg(domain)
            .arg("A")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|source| ResolveError::Invocation {
                tool: RESOLVER_BINARY.to_string(),
                domain: domain.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolveError::QueryFailed {
                tool: RESOLVER_BINARY.to_string(),
                domain: domain.to_string(),
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolves `domain`, retrying transient failures with a fixed backoff.
///
/// Attempts run in a bounded loop: at most [`RETRY_MAX_ATTEMPTS`]
/// invocations, with a [`RETRY_BACKOFF`] sleep between consecutive ones.
/// A call that fails `k < 10` times and then succeeds issues exactly
/// `k + 1` invocations with `k` sleeps. Exhausting the budget returns an
/// empty answer — a data outcome, not an error; the parser then reports
/// the domain as unsupported.
pub async fn resolve_with_retry(resolver: &dyn Resolver, domain: &str, stats: &ProbeStats) -> String {
    for attempt in 0..RETRY_MAX_ATTEMPTS {
        match resolver.resolve(domain).await {
            Ok(answer) => return answer,
            Err(e) => {
                stats.increment(ErrorType::ResolveAttemptError);
                warn!(
                    "Problem resolving {domain} (attempt {} of {}): {e}",
                    attempt + 1,
                    RETRY_MAX_ATTEMPTS
                );
                if attempt + 1 < RETRY_MAX_ATTEMPTS {
                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
            }
        }
    }
    stats.increment(ErrorType::ResolveExhaustedError);
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Fails the first `fail_count` calls, then answers.
    struct FlakyResolver {
        fail_count: usize,
        calls: AtomicUsize,
        answer: String,
    }

    impl FlakyResolver {
        fn new(fail_count: usize, answer: &str) -> Self {
            Self {
                fail_count,
                calls: AtomicUsize::new(0),
                answer: answer.to_string(),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Resolver for FlakyResolver {
        async fn resolve(&self, domain: &str) -> Result<String, ResolveError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_count {
                Err(ResolveError::Invocation {
                    tool: RESOLVER_BINARY.to_string(),
                    domain: domain.to_string(),
                    source: std::io::Error::other("simulated failure"),
                })
            } else {
                Ok(self.answer.clone())
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_succeeds_after_k_failures() {
        let resolver = FlakyResolver::new(3, "answer text");
        let stats = ProbeStats::new();

        let started = tokio::time::Instant::now();
        let answer = resolve_with_retry(&resolver, "example.com", &stats).await;

        assert_eq!(answer, "answer text");
        // k failures then success: k+1 invocations, k one-second sleeps.
        assert_eq!(resolver.calls(), 4);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        assert_eq!(stats.get_count(ErrorType::ResolveAttemptError), 3);
        assert_eq!(stats.get_count(ErrorType::ResolveExhaustedError), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_exhaustion_returns_empty_answer() {
        let resolver = FlakyResolver::new(usize::MAX, "never");
        let stats = ProbeStats::new();

        let answer = resolve_with_retry(&resolver, "example.com", &stats).await;

        assert_eq!(answer, "");
        assert_eq!(resolver.calls(), RETRY_MAX_ATTEMPTS);
        assert_eq!(
            stats.get_count(ErrorType::ResolveAttemptError),
            RETRY_MAX_ATTEMPTS
        );
        assert_eq!(stats.get_count(ErrorType::ResolveExhaustedError), 1);
    }

    #[tokio::test]
    async fn test_immediate_success_issues_one_invocation() {
        let resolver = FlakyResolver::new(0, "answer");
        let stats = ProbeStats::new();

        let answer = resolve_with_retry(&resolver, "example.com", &stats).await;

        assert_eq!(answer, "answer");
        assert_eq!(resolver.calls(), 1);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_locate_in_finds_executable() {
        use std::io::Write;

        let dir = tempfile::tempdir().expect("tempdir");
        let candidate = dir.path().join(RESOLVER_BINARY);
        let mut file = std::fs::File::create(&candidate).expect("create file");
        file.write_all(b"#!/bin/sh\n").expect("write");
        drop(file);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&candidate, std::fs::Permissions::from_mode(0o755))
                .expect("chmod");
        }

        let resolver =
            DigResolver::locate_in([dir.path().to_path_buf()]).expect("should locate binary");
        assert_eq!(resolver.binary(), candidate.as_path());
    }

    #[test]
    fn test_locate_in_missing_tool_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = DigResolver::locate_in([dir.path().to_path_buf()]);
        assert!(matches!(
            result,
            Err(InitializationError::ResolverNotFound(_))
        ));
    }
}
