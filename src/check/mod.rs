// src/check/mod.rs
mod probe;
mod registry;

pub use probe::{Check, Probe};
pub use registry::CheckRegistry;

/// Why a check did not pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckFailure {
    /// The probe returned an error.
    #[error("{0}")]
    Reported(String),

    /// The probe panicked or its task was lost.
    #[error("check failed: {0}")]
    Fault(String),
}
