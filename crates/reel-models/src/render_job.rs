//! Render job lifecycle: engine status snapshots and the orchestrator's
//! per-job state entity.
//!
//! The engine assigns the job id at submission; the orchestrator never
//! mints ids locally. A `RenderJob` is owned by exactly one render request
//! and mutated only as new status snapshots arrive from polling.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback detail used when the engine reports failure without a message.
pub const GENERIC_FAILURE_DETAIL: &str =
    "The render engine reported a failure without an error message";

/// Opaque job identifier assigned by the render engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RenderJobId(pub String);

impl RenderJobId {
    /// Create from an engine-provided string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status token reported by the render engine.
///
/// `Unknown` absorbs tokens introduced by the engine after this crate was
/// written; anything non-terminal keeps the poll loop going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EngineStatus {
    Planned,
    Waiting,
    Transcribing,
    Rendering,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

impl EngineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineStatus::Planned => "planned",
            EngineStatus::Waiting => "waiting",
            EngineStatus::Transcribing => "transcribing",
            EngineStatus::Rendering => "rendering",
            EngineStatus::Succeeded => "succeeded",
            EngineStatus::Failed => "failed",
            EngineStatus::Unknown => "unknown",
        }
    }

    /// Whether the engine will report no further changes for this job.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineStatus::Succeeded | EngineStatus::Failed)
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One status read from the engine, uncached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderJobSnapshot {
    pub status: EngineStatus,
    /// Playable result URL; meaningful only when status is `succeeded`
    pub url: Option<String>,
    /// Engine error message; meaningful only when status is `failed`
    pub error_message: Option<String>,
}

/// Orchestrator-side job state.
///
/// `TimedOut` is local: it means the polling ceiling was exceeded, not
/// that the engine reported anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RenderState {
    /// Submitted to the engine, no status observed yet
    Submitted,
    /// Engine is working (any non-terminal engine status)
    Rendering,
    /// Engine finished; result URL available
    Succeeded,
    /// Engine reported a terminal failure
    Failed,
    /// Polling ceiling exceeded before a terminal engine status
    TimedOut,
}

impl RenderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderState::Submitted => "submitted",
            RenderState::Rendering => "rendering",
            RenderState::Succeeded => "succeeded",
            RenderState::Failed => "failed",
            RenderState::TimedOut => "timed_out",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RenderState::Succeeded | RenderState::Failed | RenderState::TimedOut
        )
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle entity for one submitted render job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderJob {
    /// Engine-assigned job id
    pub id: RenderJobId,
    /// Current orchestrator-side state
    pub state: RenderState,
    /// Playable result URL; set only on success
    pub result_url: Option<String>,
    /// Failure detail; set only on failure or timeout
    pub error_detail: Option<String>,
    /// When the job was submitted
    pub created_at: DateTime<Utc>,
    /// When the state last changed
    pub updated_at: DateTime<Utc>,
}

impl RenderJob {
    /// Create a job entity right after submission.
    pub fn submitted(id: RenderJobId) -> Self {
        let now = Utc::now();
        Self {
            id,
            state: RenderState::Submitted,
            result_url: None,
            error_detail: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Fold one engine snapshot into the job state.
    ///
    /// Non-terminal engine statuses move (or keep) the job in `Rendering`.
    /// A `succeeded` snapshot without a result URL is an engine contract
    /// violation and is treated as a failure. Once terminal, further
    /// snapshots are ignored.
    pub fn apply_snapshot(&mut self, snapshot: &RenderJobSnapshot) {
        if self.is_terminal() {
            return;
        }
        match snapshot.status {
            EngineStatus::Succeeded => match &snapshot.url {
                Some(url) => self.succeed(url.clone()),
                None => self.fail(Some(
                    "Engine reported success without a result URL".to_string(),
                )),
            },
            EngineStatus::Failed => self.fail(snapshot.error_message.clone()),
            _ => {
                self.state = RenderState::Rendering;
                self.updated_at = Utc::now();
            }
        }
    }

    /// Mark the job succeeded with its playable URL.
    pub fn succeed(&mut self, url: impl Into<String>) {
        self.state = RenderState::Succeeded;
        self.result_url = Some(url.into());
        self.updated_at = Utc::now();
    }

    /// Mark the job failed, falling back to a generic detail message when
    /// the engine omitted (or blanked) one.
    pub fn fail(&mut self, detail: Option<String>) {
        let detail = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_DETAIL.to_string());
        self.state = RenderState::Failed;
        self.error_detail = Some(detail);
        self.updated_at = Utc::now();
    }

    /// Mark the job timed out after the polling ceiling was exceeded.
    pub fn time_out(&mut self, detail: impl Into<String>) {
        self.state = RenderState::TimedOut;
        self.error_detail = Some(detail.into());
        self.updated_at = Utc::now();
    }
}
