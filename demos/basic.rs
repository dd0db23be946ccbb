//! demos/basic.rs
//! Run: cargo run --example basic -- [config.yaml]
//!
//! Serves `/health/live` and `/health/ready`. The `dependency` check flips
//! between healthy and unhealthy every 30 s so the report can be watched.

use health_server::{
    load_config, BoxError, CheckRegistry, EndpointConfig, HealthServer, ResponseMode, ServerConfig,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("health_server=debug".parse()?)
                .add_directive("hyper=info".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            load_config(&path).await?
        }
        None => default_config(),
    };

    let dependency_up = Arc::new(AtomicBool::new(true));
    {
        let flag = dependency_up.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(30)).await;
                let was_up = flag.fetch_xor(true, Ordering::SeqCst);
                info!("Dependency flipped to {}", if was_up { "down" } else { "up" });
            }
        });
    }

    let mut registry = CheckRegistry::new();
    registry.register_fn("process", || Ok::<(), BoxError>(()));
    registry.register_fn("dependency", move || {
        if dependency_up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err::<(), BoxError>("dependency unreachable".into())
        }
    });

    let mut server = HealthServer::from_config(&config, &registry)?;
    let addr = server.start().await?;
    for path in server.router().paths() {
        info!("Probe at http://{}{}", addr, path);
    }

    shutdown_signal().await;
    server.shutdown().await?;
    Ok(())
}

fn default_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1:8081".to_string(),
        endpoints: vec![
            EndpointConfig {
                name: "health/live".to_string(),
                mode: ResponseMode::StatusText,
                checks: vec!["process".to_string()],
            },
            EndpointConfig {
                name: "health/ready".to_string(),
                mode: ResponseMode::DetailedReport,
                checks: vec!["process".to_string(), "dependency".to_string()],
            },
        ],
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
