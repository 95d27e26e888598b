//! Composition error types.

use thiserror::Error;

/// Result type for composition operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors that can occur while planning timing or building a spec.
///
/// These are local validation failures; none of them ever reaches the
/// network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error(
        "Invalid duration request: {target_seconds}s across {scene_count} scene(s) \
         yields a non-positive clip length ({clip_duration}s)"
    )]
    InvalidDurationRequest {
        scene_count: usize,
        target_seconds: f64,
        clip_duration: f64,
    },

    #[error("Cannot compose a render spec from an empty asset list")]
    NoAssets,
}
