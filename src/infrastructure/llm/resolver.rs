//! Resolves a provider name and model to a ready [`StructuredClient`]

use std::fmt::Debug;
use std::sync::Arc;

use super::StructuredClient;
use crate::config::ProviderConfig;
use crate::domain::DomainError;

/// Trait for turning a `(provider, model)` pair into a structured client.
///
/// Lets the web handlers build a client per request without knowing where
/// keys come from.
pub trait ProviderResolver: Send + Sync + Debug {
    fn resolve(&self, provider: &str, model: &str) -> Result<StructuredClient, DomainError>;
}

/// Resolver backed by the process [`ProviderConfig`]
#[derive(Debug, Clone)]
pub struct ConfigProviderResolver {
    config: Arc<ProviderConfig>,
}

impl ConfigProviderResolver {
    pub fn new(config: Arc<ProviderConfig>) -> Self {
        Self { config }
    }
}

impl ProviderResolver for ConfigProviderResolver {
    fn resolve(&self, provider: &str, model: &str) -> Result<StructuredClient, DomainError> {
        StructuredClient::create(provider, model, &self.config)
    }
}
