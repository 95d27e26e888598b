//! Shared data models for the ReelPress render pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Media assets and the caller's target-duration selector
//! - The render engine's declarative scene/element wire format
//! - Render jobs and their lifecycle states

pub mod asset;
pub mod render_job;
pub mod spec;

// Re-export common types
pub use asset::{MediaAsset, TargetDuration, DEFAULT_FONT_SIZE};
pub use render_job::{
    EngineStatus, RenderJob, RenderJobId, RenderJobSnapshot, RenderState,
};
pub use spec::{
    Element, RenderSpec, Transition, TransitionKind, CROSSFADE_SECONDS, FRAME_RATE,
    OUTPUT_FORMAT, OUTPUT_HEIGHT, OUTPUT_WIDTH,
};
