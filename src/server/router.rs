// src/server/router.rs
use crate::endpoint::Endpoint;
use crate::error::HealthError;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::sync::Arc;

/// Route key for an endpoint name: leading slashes are not significant.
pub fn route_key(name: &str) -> Result<&str, HealthError> {
    let key = name.trim_start_matches('/');
    if key.is_empty() {
        return Err(HealthError::EmptyEndpointName);
    }
    Ok(key)
}

/// Immutable path to endpoint table, fixed at startup.
#[derive(Debug, Default)]
pub struct Router {
    routes: HashMap<String, Arc<Endpoint>>,
}

impl Router {
    pub fn new(endpoints: impl IntoIterator<Item = Endpoint>) -> Result<Self, HealthError> {
        let mut routes = HashMap::new();
        for endpoint in endpoints {
            let key = route_key(endpoint.name())?.to_string();
            if routes.contains_key(&key) {
                return Err(HealthError::DuplicateEndpoint(key));
            }
            tracing::debug!(
                "Registered endpoint /{} ({} checks, {:?})",
                key,
                endpoint.checks().len(),
                endpoint.mode()
            );
            routes.insert(key, Arc::new(endpoint));
        }
        Ok(Self { routes })
    }

    /// Looks up a request path such as `/health/live`. The path is
    /// percent-decoded first; paths that do not decode to UTF-8 match nothing.
    pub fn resolve(&self, path: &str) -> Option<Arc<Endpoint>> {
        let decoded = percent_decode_str(path).decode_utf8().ok()?;
        let key = decoded.strip_prefix('/')?;
        self.routes.get(key).cloned()
    }

    pub fn paths(&self) -> impl Iterator<Item = String> + '_ {
        self.routes.keys().map(|key| format!("/{}", key))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_paths_only() {
        let router = Router::new([Endpoint::new("health/live"), Endpoint::new("/ready")]).unwrap();

        assert!(router.resolve("/health/live").is_some());
        assert!(router.resolve("/ready").is_some());
        assert!(router.resolve("/health").is_none());
        assert!(router.resolve("/").is_none());
        assert!(router.resolve("ready").is_none());
        assert_eq!(router.len(), 2);
        assert!(!router.is_empty());
    }

    #[test]
    fn resolves_percent_encoded_paths() {
        let router = Router::new([Endpoint::new("health ready"), Endpoint::new("bücher")]).unwrap();

        assert!(router.resolve("/health%20ready").is_some());
        assert!(router.resolve("/b%C3%BCcher").is_some());
        assert!(router.resolve("/health%20live").is_none());
        assert!(router.resolve("/%FF%FE").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Router::new([Endpoint::new("health"), Endpoint::new("/health")]).unwrap_err();

        assert!(matches!(err, HealthError::DuplicateEndpoint(ref name) if name == "health"));
        assert!(err.is_configuration());
    }

    #[test]
    fn rejects_empty_names() {
        assert!(matches!(
            Router::new([Endpoint::new("")]),
            Err(HealthError::EmptyEndpointName)
        ));
        assert!(matches!(route_key("//"), Err(HealthError::EmptyEndpointName)));
    }
}
