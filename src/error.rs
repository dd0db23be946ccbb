// src/error.rs
use std::net::SocketAddr;

use crate::response::report::TemplateError;

/// Boxed error returned by check probes and used at the HTTP service seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("endpoint name must not be empty")]
    EmptyEndpointName,

    #[error("endpoint `{0}` is registered more than once")]
    DuplicateEndpoint(String),

    #[error("endpoint `{endpoint}` refers to unknown check `{check}`")]
    UnknownCheck { endpoint: String, check: String },

    #[error("report template: {0}")]
    Template(#[from] TemplateError),

    #[error("failed to bind health server to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("health server already running on {0}")]
    AlreadyRunning(SocketAddr),

    #[error("health server error: {0}")]
    Serve(#[from] hyper::Error),

    #[error("health server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl HealthError {
    /// Configuration errors are detected before the server starts serving.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HealthError::EmptyEndpointName
                | HealthError::DuplicateEndpoint(_)
                | HealthError::UnknownCheck { .. }
                | HealthError::Template(_)
        )
    }
}
