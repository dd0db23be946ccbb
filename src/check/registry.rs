// src/check/registry.rs
use super::probe::{Check, Probe};
use crate::error::BoxError;
use std::collections::HashMap;
use std::sync::Arc;

/// Probes registered by name so a configuration file can refer to them.
#[derive(Clone, Default)]
pub struct CheckRegistry {
    probes: HashMap<String, Arc<dyn Probe>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, probe: impl Probe) -> &mut Self {
        let name = name.into();
        if self.probes.insert(name.clone(), Arc::new(probe)).is_some() {
            tracing::warn!("Check {} registered twice, keeping the latest probe", name);
        }
        self
    }

    pub fn register_fn<F, E>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let name = name.into();
        let check = Check::from_fn(name.clone(), f);
        self.probes.insert(name, check.probe());
        self
    }

    /// Builds a fresh `Check` for one endpoint. Probes are shared, checks are not.
    pub fn resolve(&self, name: &str) -> Option<Check> {
        self.probes
            .get(name)
            .map(|probe| Check::from_shared(name, probe.clone()))
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}
