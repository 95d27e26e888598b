//! Render engine HTTP client.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use reel_models::{RenderJobId, RenderJobSnapshot, RenderSpec};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// Client for the render engine API.
///
/// Submission and status reads are independent single-shot calls; retry
/// policy lives in the poll driver, and only for status reads. Submission
/// is not idempotent on the engine side and must never be silently
/// retried.
#[derive(Clone)]
pub struct RenderClient {
    config: EngineConfig,
    client: Client,
}

/// The engine answers a submission with one job descriptor or an array of
/// them; the first descriptor carries the job id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SubmitResponse {
    Many(Vec<JobDescriptor>),
    One(JobDescriptor),
}

#[derive(Debug, Deserialize)]
struct JobDescriptor {
    id: Option<String>,
}

impl SubmitResponse {
    fn into_job_id(self) -> Option<RenderJobId> {
        let first = match self {
            SubmitResponse::Many(mut descriptors) => {
                if descriptors.is_empty() {
                    return None;
                }
                descriptors.remove(0)
            }
            SubmitResponse::One(descriptor) => descriptor,
        };
        first.id.map(RenderJobId::from_string)
    }
}

impl RenderClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> EngineResult<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    /// Submit a render spec and return the engine-assigned job id.
    pub async fn submit(&self, spec: &RenderSpec) -> EngineResult<RenderJobId> {
        let url = format!("{}/renders", self.config.base_url);
        debug!(scene_count = spec.scene_count(), "Submitting render spec");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&json!({ "source": spec }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Pass the engine's validation text through verbatim
            let detail = response.text().await.unwrap_or_default();
            return Err(EngineError::SubmissionRejected {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|_| EngineError::NoJobIdReturned)?;
        let job_id = body.into_job_id().ok_or(EngineError::NoJobIdReturned)?;

        info!(job_id = %job_id, "Render job submitted");
        Ok(job_id)
    }

    /// Fetch the current status of a job. Single read, no caching, no
    /// retries at this layer.
    pub async fn fetch_status(&self, job_id: &RenderJobId) -> EngineResult<RenderJobSnapshot> {
        let url = format!("{}/renders/{}", self.config.base_url, job_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EngineError::StatusRejected {
                job_id: job_id.to_string(),
                status: status.as_u16(),
                detail,
            });
        }

        let snapshot: RenderJobSnapshot = response
            .json()
            .await
            .map_err(|e| EngineError::invalid_response(e.to_string()))?;

        debug!(job_id = %job_id, status = %snapshot.status, "Fetched job status");
        Ok(snapshot)
    }
}
