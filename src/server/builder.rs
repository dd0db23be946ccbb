// src/server/builder.rs
use super::lifecycle::HealthServer;
use crate::endpoint::Endpoint;
use crate::error::HealthError;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";

/// Collects endpoints before the server is built.
#[derive(Debug)]
pub struct HealthServerBuilder {
    address: String,
    endpoints: Vec<Endpoint>,
}

impl Default for HealthServerBuilder {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            endpoints: Vec::new(),
        }
    }
}

impl HealthServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen address as `host:port`. Port `0` picks a free port.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    pub fn endpoints(mut self, endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        self.endpoints.extend(endpoints);
        self
    }

    /// Validates the routes and builds the report template. Nothing is bound yet.
    pub fn build(self) -> Result<HealthServer, HealthError> {
        HealthServer::new(self.address, self.endpoints)
    }
}
