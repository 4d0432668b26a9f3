//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::llm::ProviderResolver;
use crate::infrastructure::services::TranslationService;

/// Shared, read-only handles used by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: Arc<dyn ProviderResolver>,
    pub translation_service: Arc<TranslationService>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn ProviderResolver>) -> Self {
        Self {
            resolver,
            translation_service: Arc::new(TranslationService::new()),
        }
    }
}
