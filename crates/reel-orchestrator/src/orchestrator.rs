//! The render orchestrator: one request in, one playable URL (or typed
//! failure) out.

use std::path::PathBuf;

use tokio::sync::watch;
use tracing::info;

use reel_composer::compose;
use reel_engine::{PollDriver, PollHandle, PollOutcome, RenderClient};
use reel_models::{RenderJobId, RenderState, TargetDuration};
use reel_storage::{MediaUploader, UploadCoordinator};

use crate::config::OrchestratorConfig;
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::request::{LocalMediaItem, RenderItem, RenderRequest};

/// Drives one render request end to end.
///
/// Owns nothing shared: each call creates its own job entity and poll
/// loop, so concurrent requests never touch each other's state. The only
/// shared resource is the engine credential inside the client, which is
/// read-only.
pub struct RenderOrchestrator {
    client: RenderClient,
    config: OrchestratorConfig,
}

impl RenderOrchestrator {
    /// Create an orchestrator over the given engine client.
    pub fn new(client: RenderClient, config: OrchestratorConfig) -> Self {
        Self { client, config }
    }

    /// Compose, submit, and poll to completion. Returns the playable
    /// result URL.
    pub async fn render(&self, request: &RenderRequest) -> OrchestratorResult<String> {
        let job_id = self.submit(request).await?;

        // Keep the sender alive for the whole run; this path has no
        // external cancellation
        let (_cancel, cancel_rx) = watch::channel(false);
        let driver = PollDriver::new(self.client.clone(), self.config.poll_config());
        let outcome = driver.run(job_id, cancel_rx).await;

        Self::unwrap_outcome(outcome)
    }

    /// Compose and submit, then poll in the background. The returned
    /// handle can be cancelled at any time; after `cancel()` no further
    /// status request is issued.
    pub async fn begin(&self, request: &RenderRequest) -> OrchestratorResult<PollHandle> {
        let job_id = self.submit(request).await?;
        let driver = PollDriver::new(self.client.clone(), self.config.poll_config());
        Ok(driver.spawn(job_id))
    }

    /// Resolve local files to durable URLs first, then render. A single
    /// failed upload aborts the whole request before composition; partial
    /// upload results are discarded.
    pub async fn render_files<U: MediaUploader>(
        &self,
        coordinator: &UploadCoordinator<U>,
        items: &[LocalMediaItem],
        target_duration: TargetDuration,
    ) -> OrchestratorResult<String> {
        let paths: Vec<PathBuf> = items.iter().map(|item| item.path.clone()).collect();
        let urls = coordinator.resolve(&paths).await?;

        // resolve() is index-aligned, so zipping preserves scene order
        let media_items = urls
            .into_iter()
            .zip(items)
            .map(|(url, item)| RenderItem {
                url,
                text: item.text.clone(),
                font_size: item.font_size.clone(),
            })
            .collect();

        self.render(&RenderRequest {
            media_items,
            target_duration,
        })
        .await
    }

    async fn submit(&self, request: &RenderRequest) -> OrchestratorResult<RenderJobId> {
        let assets = request.to_assets();
        let spec = compose(&assets, request.target_duration)?;
        info!(
            scene_count = spec.scene_count(),
            target_duration = ?request.target_duration,
            "Submitting composed render spec"
        );
        let job_id = self.client.submit(&spec).await?;
        Ok(job_id)
    }

    fn unwrap_outcome(outcome: PollOutcome) -> OrchestratorResult<String> {
        match outcome {
            PollOutcome::Finished(job) => match job.state {
                RenderState::Succeeded => job.result_url.ok_or_else(|| {
                    OrchestratorError::EngineRenderFailed(
                        "Engine reported success without a result URL".to_string(),
                    )
                }),
                RenderState::TimedOut => Err(OrchestratorError::TimedOut(
                    job.error_detail
                        .unwrap_or_else(|| "Polling ceiling exceeded".to_string()),
                )),
                _ => Err(OrchestratorError::EngineRenderFailed(
                    job.error_detail
                        .unwrap_or_else(|| "Rendering failed".to_string()),
                )),
            },
            PollOutcome::Cancelled(_) => Err(OrchestratorError::Cancelled),
        }
    }
}
