//! Orchestrator configuration.

use std::time::Duration;

use reel_engine::PollConfig;

/// Orchestrator configuration.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Time between job status reads
    pub poll_interval: Duration,
    /// Wall-clock polling ceiling
    pub poll_max_wait: Duration,
    /// Attempt-count polling ceiling
    pub poll_max_attempts: u32,
    /// Object key prefix for uploaded media
    pub upload_prefix: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            poll_max_wait: Duration::from_secs(600),
            poll_max_attempts: 120,
            upload_prefix: "uploads".to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            poll_interval: Duration::from_secs(
                std::env::var("RENDER_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            poll_max_wait: Duration::from_secs(
                std::env::var("RENDER_POLL_MAX_WAIT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600),
            ),
            poll_max_attempts: std::env::var("RENDER_POLL_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            upload_prefix: std::env::var("RENDER_UPLOAD_PREFIX")
                .unwrap_or_else(|_| "uploads".to_string()),
        }
    }

    /// The poll driver view of this config.
    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            interval: self.poll_interval,
            max_wait: self.poll_max_wait,
            max_attempts: self.poll_max_attempts,
        }
    }
}
