//! Orchestrator error types.
//!
//! The caller-facing taxonomy: enough detail to tell "your input was
//! invalid" from "the engine is unavailable" from "the engine finished and
//! rejected the content."

use thiserror::Error;

use reel_composer::ComposeError;
use reel_engine::EngineError;
use reel_storage::StorageError;

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Local validation failure; never reached the network
    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    /// Prerequisite upload failure; composition was never attempted
    #[error("Upload failed: {0}")]
    Upload(#[from] StorageError),

    /// Submission or status-read failure reported by the engine client
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// The engine finished and explicitly reported a render failure
    #[error("Rendering failed: {0}")]
    EngineRenderFailed(String),

    /// The polling ceiling was exceeded before a terminal engine status
    #[error("Rendering timed out: {0}")]
    TimedOut(String),

    /// The caller abandoned the job before it finished
    #[error("Render polling was cancelled")]
    Cancelled,
}

impl OrchestratorError {
    /// The requested target duration cannot produce a valid timing plan.
    pub fn is_invalid_duration(&self) -> bool {
        matches!(
            self,
            OrchestratorError::Compose(ComposeError::InvalidDurationRequest { .. })
        )
    }

    /// A prerequisite upload failed; nothing was submitted.
    pub fn is_upload_failure(&self) -> bool {
        matches!(
            self,
            OrchestratorError::Upload(StorageError::UploadFailed { .. })
        )
    }

    /// The engine rejected the submitted spec outright.
    pub fn is_submission_rejected(&self) -> bool {
        matches!(
            self,
            OrchestratorError::Engine(EngineError::SubmissionRejected { .. })
        )
    }
}
