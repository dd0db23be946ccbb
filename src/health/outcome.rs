// src/health/outcome.rs
use crate::check::CheckFailure;
use std::sync::Arc;

/// Result of running one check for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: Arc<str>,
    pub error: Option<CheckFailure>,
}

impl CheckOutcome {
    pub fn passed(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            error: None,
        }
    }

    pub fn failed(name: impl Into<Arc<str>>, error: CheckFailure) -> Self {
        Self {
            name: name.into(),
            error: Some(error),
        }
    }

    pub fn is_passing(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of one endpoint evaluation, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    outcomes: Vec<CheckOutcome>,
}

impl AggregateResult {
    pub fn new(outcomes: Vec<CheckOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// True when no check failed. An empty result is healthy.
    pub fn is_healthy(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::is_passing)
    }

    pub fn failing(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.is_passing())
    }
}
