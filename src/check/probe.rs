// src/check/probe.rs
use crate::error::BoxError;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A single health probe. Implementations report `Ok(())` when healthy.
#[async_trait]
pub trait Probe: Send + Sync + 'static {
    async fn probe(&self) -> Result<(), BoxError>;
}

/// A named probe, owned by one endpoint.
#[derive(Clone)]
pub struct Check {
    name: Arc<str>,
    probe: Arc<dyn Probe>,
}

impl Check {
    pub fn new(name: impl Into<String>, probe: impl Probe) -> Self {
        Self::from_shared(name, Arc::new(probe))
    }

    pub fn from_shared(name: impl Into<String>, probe: Arc<dyn Probe>) -> Self {
        Self {
            name: Arc::from(name.into()),
            probe,
        }
    }

    /// Wraps a blocking closure. It runs on tokio's blocking pool so a slow
    /// call does not hold up a runtime worker.
    pub fn from_fn<F, E>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::new(name, BlockingProbe(Arc::new(f)))
    }

    /// Wraps a closure returning a future.
    pub fn from_async_fn<F, Fut, E>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::new(name, AsyncProbe(f))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        self.name.clone()
    }

    pub(crate) fn probe(&self) -> Arc<dyn Probe> {
        self.probe.clone()
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

struct BlockingProbe<F>(Arc<F>);

#[async_trait]
impl<F, E> Probe for BlockingProbe<F>
where
    F: Fn() -> Result<(), E> + Send + Sync + 'static,
    E: Into<BoxError>,
{
    async fn probe(&self) -> Result<(), BoxError> {
        let f = self.0.clone();
        match tokio::task::spawn_blocking(move || -> Result<(), BoxError> { f().map_err(Into::into) }).await {
            Ok(result) => result,
            // Re-raise so the collector records it as a fault.
            Err(err) => match err.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(err) => Err(err.into()),
            },
        }
    }
}

struct AsyncProbe<F>(F);

#[async_trait]
impl<F, Fut, E> Probe for AsyncProbe<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Into<BoxError>,
{
    async fn probe(&self) -> Result<(), BoxError> {
        (self.0)().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocking_closure_reports_its_error() {
        let check = Check::from_fn("db", || Err::<(), _>("connection refused"));

        let err = check.probe().probe().await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(check.name(), "db");
    }

    #[tokio::test]
    async fn async_closure_passes() {
        let check = Check::from_async_fn("cache", || async { Ok::<(), BoxError>(()) });

        assert!(check.probe().probe().await.is_ok());
    }

    #[test]
    fn debug_shows_only_the_name() {
        let check = Check::from_fn("disk", || Ok::<(), BoxError>(()));
        assert_eq!(format!("{:?}", check), r#"Check { name: "disk" }"#);
    }
}
