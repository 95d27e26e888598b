//! Engine error types.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while talking to the render engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine rejected the submitted spec. The detail body is passed
    /// through verbatim; the engine's validation messages are the primary
    /// signal of a malformed spec.
    #[error("Render engine rejected the submission ({status}): {detail}")]
    SubmissionRejected { status: u16, detail: String },

    /// The engine accepted the submission but its response carried no
    /// usable job identifier. An engine-side contract violation, distinct
    /// from a rejection.
    #[error("Render engine accepted the submission but returned no job id")]
    NoJobIdReturned,

    /// A status read came back with a non-success HTTP status.
    #[error("Status fetch for job {job_id} failed ({status}): {detail}")]
    StatusRejected {
        job_id: String,
        status: u16,
        detail: String,
    },

    /// The engine answered with a body this client cannot decode.
    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),

    #[error("Engine configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl EngineError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Whether this error is safe to absorb inside the poll loop and retry
    /// on the next tick. Submission errors are never retried.
    pub fn is_transient_fetch(&self) -> bool {
        matches!(
            self,
            EngineError::Transport(_)
                | EngineError::InvalidResponse(_)
                | EngineError::StatusRejected { .. }
        )
    }
}
