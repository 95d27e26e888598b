//! Per-scene clip timing.

use tracing::debug;

use reel_models::TargetDuration;

use crate::error::{ComposeError, ComposeResult};

/// Compute the uniform per-scene clip length for a requested total.
///
/// Each crossfade overlaps two adjacent clips by `overlap_seconds`, so the
/// rendered total is shorter than the sum of the clip lengths. To land on
/// the requested total after overlap collapse, every clip is lengthened to
/// compensate:
///
/// `clip = (target + (scenes - 1) * overlap) / scenes`
///
/// e.g. 15 s over 3 scenes with a 1 s overlap gives (15 + 2) / 3 ≈ 5.67 s
/// per clip. A single scene has no transitions and the formula degenerates
/// to `clip = target`, which is correct.
///
/// Returns `None` for [`TargetDuration::Original`]: every clip keeps its
/// native length and no trimming happens.
pub fn normalize(
    scene_count: usize,
    target: TargetDuration,
    overlap_seconds: f64,
) -> ComposeResult<Option<f64>> {
    let target_seconds = match target.seconds() {
        Some(s) => s,
        None => return Ok(None),
    };
    if scene_count == 0 {
        return Err(ComposeError::NoAssets);
    }

    let overlap_total = (scene_count as f64 - 1.0) * overlap_seconds;
    let clip_duration = (target_seconds + overlap_total) / scene_count as f64;

    // A target shorter than the combined overlap would leave clips shorter
    // than the crossfade itself, which the engine cannot render.
    if !clip_duration.is_finite() || clip_duration <= 0.0 || target_seconds < overlap_total {
        return Err(ComposeError::InvalidDurationRequest {
            scene_count,
            target_seconds,
            clip_duration,
        });
    }

    debug!(
        scene_count,
        target_seconds, clip_duration, "Computed uniform clip duration"
    );

    Ok(Some(clip_duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(s: f64) -> TargetDuration {
        TargetDuration::Seconds(s)
    }

    #[test]
    fn test_overlap_compensation() {
        // 3 scenes, 15 s target, 1 s crossfade: (15 + 2) / 3
        let clip = normalize(3, seconds(15.0), 1.0).unwrap().unwrap();
        assert!((clip - 17.0 / 3.0).abs() < 1e-9);

        // Rendered total collapses back to the target:
        // 3 clips minus 2 overlaps
        let total = clip * 3.0 - 2.0 * 1.0;
        assert!((total - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_scene_has_no_compensation() {
        let clip = normalize(1, seconds(10.0), 1.0).unwrap().unwrap();
        assert_eq!(clip, 10.0);
    }

    #[test]
    fn test_original_means_no_trimming() {
        assert_eq!(normalize(5, TargetDuration::Original, 1.0).unwrap(), None);
        // Scene count is not even inspected for the sentinel
        assert_eq!(normalize(0, TargetDuration::Original, 1.0).unwrap(), None);
    }

    #[test]
    fn test_non_positive_result_is_rejected() {
        let err = normalize(3, seconds(-10.0), 1.0).unwrap_err();
        match err {
            ComposeError::InvalidDurationRequest {
                scene_count,
                target_seconds,
                ..
            } => {
                assert_eq!(scene_count, 3);
                assert_eq!(target_seconds, -10.0);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(normalize(2, seconds(0.0), 0.0).is_err());
    }

    #[test]
    fn test_target_shorter_than_combined_overlap_is_rejected() {
        // 3 scenes need 2 s of crossfade overlap; a 1.5 s total cannot
        // accommodate it even though the raw formula stays positive.
        assert!(matches!(
            normalize(3, seconds(1.5), 1.0),
            Err(ComposeError::InvalidDurationRequest { .. })
        ));
        // Exactly the overlap total is still renderable
        assert!(normalize(3, seconds(2.0), 1.0).is_ok());
    }

    #[test]
    fn test_zero_scenes_with_numeric_target() {
        assert!(matches!(
            normalize(0, seconds(15.0), 1.0),
            Err(ComposeError::NoAssets)
        ));
    }
}
