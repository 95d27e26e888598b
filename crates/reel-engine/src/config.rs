//! Engine client configuration.

use crate::error::{EngineError, EngineResult};

/// Default engine API base (Creatomate-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.creatomate.com/v1";

/// Configuration for the render engine client.
///
/// Always injected at construction so the client can be pointed at a fake
/// engine in tests; never read from ambient state after startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bearer token for the engine API
    pub api_key: String,
    /// API base URL, without a trailing slash
    pub base_url: String,
}

impl EngineConfig {
    /// Create a config with the default production base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different engine endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create config from environment variables.
    pub fn from_env() -> EngineResult<Self> {
        let api_key = std::env::var("RENDER_ENGINE_API_KEY")
            .map_err(|_| EngineError::config_error("RENDER_ENGINE_API_KEY not set"))?;
        let base_url = std::env::var("RENDER_ENGINE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self { api_key, base_url })
    }
}
