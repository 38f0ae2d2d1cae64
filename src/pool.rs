//! Probe worker pool: fan-out over a fixed set of workers, fan-in with
//! order restoration.
//!
//! The only shared mutable state is the pair of channels (work source and
//! result sink) and the atomic error counters; workers never touch each
//! other. Submission order is recovered post hoc by the aggregator, which
//! places every result at its original input position.

use std::sync::Arc;

use anyhow::{bail, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::warn;
use tokio::sync::{mpsc, Mutex};

use crate::app::log_progress;
use crate::error_handling::{ErrorType, ProbeStats};
use crate::models::{DomainEntry, ProbeResult};
use crate::resolver::{resolve_with_retry, Resolver};
use crate::rrsig::{parse_rrsig, RrsigFields};

/// A unit of work: the entry plus its position in the input list.
///
/// Position, not rank, is the placement key on the way back in; rank is
/// carried only as an output field.
type Job = (usize, DomainEntry);

/// Probes every entry with at most `workers` concurrent lookups and
/// returns one result per entry, in the original input order.
///
/// Workers pull jobs from a shared channel and push results into a shared
/// sink; completions may arrive in any order, and the aggregator reinserts
/// each at its submission index. One progress line is logged per arrival.
///
/// # Errors
///
/// Fails if the result sink closes before every entry has produced a
/// result, which only happens when all workers are gone (a worker panic
/// drops its sender). Per-domain failures never abort the pool; they
/// surface as unsupported results.
pub async fn run_pool(
    resolver: Arc<dyn Resolver>,
    workers: usize,
    entries: Vec<DomainEntry>,
    stats: Arc<ProbeStats>,
) -> Result<Vec<ProbeResult>> {
    let total = entries.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    // Capacities match the input length, so submitting all jobs up front
    // never blocks and workers never block pushing results.
    let (job_tx, job_rx) = mpsc::channel::<Job>(total);
    let (result_tx, mut result_rx) = mpsc::channel::<(usize, ProbeResult)>(total);
    let job_rx = Arc::new(Mutex::new(job_rx));

    let mut handles = FuturesUnordered::new();
    for _ in 0..workers.max(1) {
        let resolver = Arc::clone(&resolver);
        let job_rx = Arc::clone(&job_rx);
        let result_tx = result_tx.clone();
        let stats = Arc::clone(&stats);
        handles.push(tokio::spawn(async move {
            loop {
                // Lock scope is a single recv; the probe itself runs
                // without holding anything shared.
                let job = { job_rx.lock().await.recv().await };
                let Some((position, entry)) = job else {
                    break;
                };
                let result = probe(resolver.as_ref(), entry, &stats).await;
                if result_tx.send((position, result)).await.is_err() {
                    break;
                }
            }
        }));
    }
    drop(result_tx);

    for job in entries.into_iter().enumerate() {
        // Cannot fail: capacity covers all jobs and workers outlive this loop.
        let _ = job_tx.send(job).await;
    }
    drop(job_tx);

    let mut slots: Vec<Option<ProbeResult>> = vec![None; total];
    let mut received = 0usize;
    while received < total {
        match result_rx.recv().await {
            Some((position, result)) => {
                received += 1;
                log_progress(received, &result);
                slots[position] = Some(result);
            }
            None => {
                bail!(
                    "worker pool terminated after {received} of {total} results; \
                     a worker likely crashed"
                );
            }
        }
    }

    while let Some(joined) = handles.next().await {
        if let Err(join_error) = joined {
            warn!("Worker task panicked: {join_error:?}");
        }
    }

    // Every slot was filled above: received == total and positions are unique.
    Ok(slots.into_iter().flatten().collect())
}

/// Runs one full probe: resolve with retry, parse, build the result.
async fn probe(resolver: &dyn Resolver, entry: DomainEntry, stats: &ProbeStats) -> ProbeResult {
    let answer = resolve_with_retry(resolver, &entry.domain, stats).await;
    match parse_rrsig(&answer) {
        Some(fields) => supported_result(&entry, &fields, stats),
        None => ProbeResult::unsupported(&entry),
    }
}

/// Builds a supported result from captured RRSIG fields.
///
/// Integer coercion is best-effort: a field that fails to parse stays at
/// zero and bumps the coercion counter instead of failing the probe.
fn supported_result(entry: &DomainEntry, fields: &RrsigFields, stats: &ProbeStats) -> ProbeResult {
    ProbeResult {
        rank: entry.rank,
        domain: entry.domain.clone(),
        supported: true,
        record_type: fields.type_covered.clone(),
        algorithm: coerce(&fields.algorithm, stats),
        label_count: coerce(&fields.labels, stats),
        original_ttl: coerce(&fields.original_ttl, stats),
        signature_expiration: coerce(&fields.expiration, stats),
        signature_inception: coerce(&fields.inception, stats),
        key_tag: coerce(&fields.key_tag, stats),
        signer_name: fields.signer_name.clone(),
    }
}

fn coerce(field: &str, stats: &ProbeStats) -> i64 {
    match field.parse() {
        Ok(value) => value,
        Err(_) => {
            stats.increment(ErrorType::FieldCoercionError);
            0
        }
    }
}
