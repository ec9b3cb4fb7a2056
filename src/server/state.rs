//! Application state shared by the request handlers

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::generation::{ModelProvider, OpenAiClient};
use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Hosted model API client
    provider: Arc<dyn ModelProvider>,
    /// Session registry
    sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create application state with the production model client
    pub fn new(config: AppConfig) -> Result<Self> {
        let provider: Arc<dyn ModelProvider> = Arc::new(OpenAiClient::new(&config.model)?);
        Ok(Self::with_provider(config, provider))
    }

    /// Create application state around an explicit model provider.
    ///
    /// This is the seam tests use to substitute a scripted provider.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn ModelProvider>) -> Self {
        tracing::info!("Model provider: {}", provider.name());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                provider,
                sessions: Arc::new(SessionStore::new()),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the model provider
    pub fn provider(&self) -> &Arc<dyn ModelProvider> {
        &self.inner.provider
    }

    /// Get the session registry
    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.inner.sessions
    }
}
