// src/lib.rs
//! HTTP health endpoints for embedding in a larger service.
//!
//! Each [`Endpoint`] groups named [`Check`]s and is served at `/<name>`.
//! A request runs every check of the endpoint concurrently and answers
//! `200 OK` when all pass or `503 Service Unavailable` otherwise, with a
//! body chosen by the endpoint's [`ResponseMode`].
//!
//! ```no_run
//! use health_server::{BoxError, Check, Endpoint, HealthServer, ResponseMode};
//!
//! # async fn run() -> Result<(), health_server::HealthError> {
//! let mut server = HealthServer::builder()
//!     .address("127.0.0.1:8081")
//!     .endpoint(
//!         Endpoint::new("health/ready")
//!             .with_mode(ResponseMode::DetailedReport)
//!             .with_check(Check::from_fn("always", || Ok::<(), BoxError>(()))),
//!     )
//!     .build()?;
//! server.start().await?;
//! server.shutdown().await?;
//! # Ok(())
//! # }
//! ```
pub mod check;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod health;
pub mod response;
pub mod server;

pub use check::{Check, CheckFailure, CheckRegistry, Probe};
pub use config::{load_config, EndpointConfig, ServerConfig};
pub use endpoint::Endpoint;
pub use error::{BoxError, HealthError};
pub use health::{collect, AggregateResult, CheckOutcome};
pub use response::{render, ContentType, RenderedResponse, ResponseMode};
pub use server::{HealthServer, HealthServerBuilder};
