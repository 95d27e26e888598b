//! Render pipeline orchestration.
//!
//! One render request flows through: upload resolution (optional
//! prerequisite) → duration normalization → composition → submission →
//! polling. The orchestrator owns the job for the lifetime of the request
//! and shares no mutable state with concurrent requests.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod request;

pub use config::OrchestratorConfig;
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::RenderOrchestrator;
pub use request::{LocalMediaItem, RenderItem, RenderRequest};
