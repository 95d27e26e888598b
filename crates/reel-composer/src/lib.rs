//! Scene timing and render-spec composition.
//!
//! Pure functions only: no I/O happens here. The orchestrator feeds the
//! resolved media assets and the caller's duration selector through
//! [`compose`] and submits the resulting spec to the engine.

pub mod builder;
pub mod error;
pub mod timing;

pub use builder::build;
pub use error::{ComposeError, ComposeResult};
pub use timing::normalize;

use reel_models::{MediaAsset, RenderSpec, TargetDuration, CROSSFADE_SECONDS};

/// Compute per-scene timing and compile the full render specification.
pub fn compose(assets: &[MediaAsset], target: TargetDuration) -> ComposeResult<RenderSpec> {
    let clip_duration = normalize(assets.len(), target, CROSSFADE_SECONDS)?;
    build(assets, clip_duration)
}
