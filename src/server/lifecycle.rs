// src/server/lifecycle.rs
use super::builder::HealthServerBuilder;
use super::handler::RequestHandler;
use super::listener::bind_tcp;
use super::router::Router;
use crate::check::CheckRegistry;
use crate::config::ServerConfig;
use crate::endpoint::Endpoint;
use crate::error::HealthError;
use crate::response::report;
use hyper::server::conn::AddrStream;
use hyper::service::make_service_fn;
use hyper::Server;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Serves a fixed set of endpoints over HTTP.
///
/// `start` returns once the socket is bound. `shutdown` stops accepting
/// connections and waits for in-flight requests. Dropping a running server
/// begins the same drain without waiting for it.
pub struct HealthServer {
    address: String,
    router: Arc<Router>,
    running: Option<Running>,
}

struct Running {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), hyper::Error>>,
}

impl HealthServer {
    pub fn builder() -> HealthServerBuilder {
        HealthServerBuilder::new()
    }

    pub fn new(
        address: impl Into<String>,
        endpoints: impl IntoIterator<Item = Endpoint>,
    ) -> Result<Self, HealthError> {
        let router = Router::new(endpoints)?;
        // Built here so a broken template stops startup instead of a request.
        report::template()?;

        Ok(Self {
            address: address.into(),
            router: Arc::new(router),
            running: None,
        })
    }

    /// Builds a server from a loaded configuration, taking probes from `registry`.
    pub fn from_config(config: &ServerConfig, registry: &CheckRegistry) -> Result<Self, HealthError> {
        Self::new(config.address.clone(), config.endpoints(registry)?)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Bound address while the server is running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|running| running.local_addr)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Binds the listener and starts serving in the background.
    pub async fn start(&mut self) -> Result<SocketAddr, HealthError> {
        if let Some(running) = &self.running {
            return Err(HealthError::AlreadyRunning(running.local_addr));
        }

        let listener = bind_tcp(&self.address).await?;
        let local_addr = listener.local_addr().map_err(|source| HealthError::Bind {
            address: self.address.clone(),
            source,
        })?;

        if self.router.is_empty() {
            warn!("Health server on {} has no endpoints, every path is 404", local_addr);
        }

        let handler = RequestHandler::new(self.router.clone());
        let make_service = make_service_fn(move |_conn: &AddrStream| {
            let handler = handler.clone();
            async move { Ok::<_, Infallible>(handler) }
        });

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = Server::from_tcp(listener)?
            .serve(make_service)
            .with_graceful_shutdown(async move {
                // A dropped sender also starts the drain.
                let _ = shutdown_rx.await;
            });

        info!(
            "Health server listening on http://{} ({} endpoints)",
            local_addr,
            self.router.len()
        );

        let task = tokio::spawn(async move {
            let result = server.await;
            if let Err(e) = &result {
                error!("Health server error: {}", e);
            }
            result
        });

        self.running = Some(Running {
            local_addr,
            shutdown_tx,
            task,
        });
        Ok(local_addr)
    }

    /// Stops accepting connections and waits for in-flight requests.
    /// Does nothing when the server is not running.
    pub async fn shutdown(&mut self) -> Result<(), HealthError> {
        let Some(running) = self.running.take() else {
            return Ok(());
        };

        info!("Shutting down health server on {}", running.local_addr);
        let _ = running.shutdown_tx.send(());
        running.task.await??;
        info!("Health server on {} stopped", running.local_addr);
        Ok(())
    }
}
