// src/config/models.rs
use crate::check::CheckRegistry;
use crate::endpoint::Endpoint;
use crate::error::HealthError;
use crate::response::ResponseMode;
use crate::server::{router::route_key, DEFAULT_ADDRESS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    #[serde(default)]
    pub mode: ResponseMode,
    /// Names of checks registered in a [`CheckRegistry`], in report order.
    #[serde(default)]
    pub checks: Vec<String>,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            endpoints: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Rejects empty and duplicate endpoint names.
    pub fn validate(&self) -> Result<(), HealthError> {
        let mut seen = HashSet::new();
        for endpoint in &self.endpoints {
            let key = route_key(&endpoint.name)?;
            if !seen.insert(key) {
                return Err(HealthError::DuplicateEndpoint(key.to_string()));
            }
        }
        Ok(())
    }

    /// Resolves every endpoint's check names against `registry`.
    pub fn endpoints(&self, registry: &CheckRegistry) -> Result<Vec<Endpoint>, HealthError> {
        self.validate()?;
        self.endpoints
            .iter()
            .map(|config| {
                let checks = config
                    .checks
                    .iter()
                    .map(|name| {
                        registry.resolve(name).ok_or_else(|| HealthError::UnknownCheck {
                            endpoint: config.name.clone(),
                            check: name.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Endpoint::new(config.name.clone())
                    .with_mode(config.mode)
                    .with_checks(checks))
            })
            .collect()
    }
}
