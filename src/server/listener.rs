// src/server/listener.rs
// Binds the health listener so the caller learns about bind failures
// before any request is served.
use crate::error::HealthError;
use tokio::net::TcpListener;

pub async fn bind_tcp(address: &str) -> Result<std::net::TcpListener, HealthError> {
    let bind_err = |source| HealthError::Bind {
        address: address.to_string(),
        source,
    };
    let listener = TcpListener::bind(address).await.map_err(bind_err)?;
    listener.into_std().map_err(bind_err)
}
