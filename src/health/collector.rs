// src/health/collector.rs
use super::outcome::{AggregateResult, CheckOutcome};
use crate::check::{Check, CheckFailure};
use std::any::Any;
use tokio::task::{AbortHandle, JoinError};
use tracing::{debug, error, warn};

/// Runs every check in its own task and waits for all of them.
///
/// Outcomes come back in the same order as `checks`, whatever order the
/// tasks finish in. There is no timeout: a probe that never returns holds
/// this evaluation open. A probe that panics is reported as a
/// [`CheckFailure::Fault`] and does not affect the other checks. Dropping
/// the returned future aborts the async checks still running.
pub async fn collect(checks: &[Check]) -> AggregateResult {
    if checks.is_empty() {
        return AggregateResult::default();
    }

    let tasks: Vec<_> = checks
        .iter()
        .map(|check| {
            let probe = check.probe();
            tokio::spawn(async move { probe.probe().await })
        })
        .collect();

    // Dropping the request future (client gone) aborts the check tasks.
    let _guard = AbortOnDrop(tasks.iter().map(|task| task.abort_handle()).collect());

    // join_all yields in input order, one slot per task.
    let results = futures::future::join_all(tasks).await;

    let mut outcomes = Vec::with_capacity(checks.len());
    for (check, result) in checks.iter().zip(results) {
        let outcome = match result {
            Ok(Ok(())) => {
                debug!("Check {} passed", check.name());
                CheckOutcome::passed(check.shared_name())
            }
            Ok(Err(e)) => {
                warn!("Check {} failed: {}", check.name(), e);
                CheckOutcome::failed(check.shared_name(), CheckFailure::Reported(e.to_string()))
            }
            Err(e) => {
                let fault = describe_fault(e);
                error!("Check {} faulted: {}", check.name(), fault);
                CheckOutcome::failed(check.shared_name(), CheckFailure::Fault(fault))
            }
        };
        outcomes.push(outcome);
    }

    AggregateResult::new(outcomes)
}

/// Aborts unfinished check tasks. Blocking-pool probes run to completion regardless.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

fn describe_fault(err: JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => panic_message(payload.as_ref()),
        Err(err) => err.to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
