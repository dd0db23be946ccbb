// src/endpoint/mod.rs
use crate::check::Check;
use crate::health::{self, AggregateResult};
use crate::response::{self, RenderedResponse, ResponseMode, TemplateError};
use tracing::debug;

/// A named group of checks served at `/<name>`.
#[derive(Debug, Clone)]
pub struct Endpoint {
    name: String,
    checks: Vec<Check>,
    mode: ResponseMode,
}

impl Endpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
            mode: ResponseMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Runs the checks without rendering.
    pub async fn collect(&self) -> AggregateResult {
        health::collect(&self.checks).await
    }

    /// Runs every check and renders the outcome in this endpoint's mode.
    pub async fn evaluate(&self) -> Result<RenderedResponse, TemplateError> {
        let result = self.collect().await;
        let rendered = response::render(self.mode, &result)?;
        debug!(
            "Endpoint {} evaluated: {} ({} checks, {} failing)",
            self.name,
            rendered.status,
            result.outcomes().len(),
            result.failing().count()
        );
        Ok(rendered)
    }
}
