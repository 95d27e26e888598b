//! Render-spec assembly from ordered media assets.

use reel_models::{Element, MediaAsset, RenderSpec, Transition};

use crate::error::{ComposeError, ComposeResult};

// Overlay styling fixed by the house design: bold white text on a
// semi-transparent dark plate, centered, parked at 75% of frame height.
const OVERLAY_FONT_FAMILY: &str = "Noto Sans CJK JP";
const OVERLAY_FONT_WEIGHT: &str = "bold";
const OVERLAY_FILL_COLOR: &str = "#ffffff";
const OVERLAY_BACKGROUND_COLOR: &str = "rgba(0,0,0,0.6)";
const OVERLAY_PADDING: &str = "3 vmin";
const OVERLAY_BORDER_RADIUS: &str = "2 vmin";
const OVERLAY_X_ALIGNMENT: &str = "50%";
const OVERLAY_Y_ALIGNMENT: &str = "50%";
const OVERLAY_Y: &str = "75%";
const OVERLAY_WIDTH: &str = "85%";

/// Assemble the ordered scene list into one render specification.
///
/// Scenes are emitted in asset index order. Each scene is a composition of
/// a cover-fit media layer plus, when the trimmed overlay text is
/// non-empty, a styled text layer with no time bounds. `clip_duration`
/// (when computed by [`crate::normalize`]) becomes each scene's explicit
/// duration; trimming to it is the engine's job. Every scene after the
/// first gets the fixed 1-second incoming crossfade.
pub fn build(assets: &[MediaAsset], clip_duration: Option<f64>) -> ComposeResult<RenderSpec> {
    if assets.is_empty() {
        return Err(ComposeError::NoAssets);
    }

    let scenes = assets
        .iter()
        .enumerate()
        .map(|(index, asset)| build_scene(index, asset, clip_duration))
        .collect();

    Ok(RenderSpec::portrait(scenes))
}

fn build_scene(index: usize, asset: &MediaAsset, clip_duration: Option<f64>) -> Element {
    let mut elements = vec![Element::Video {
        source: asset.source_url.clone(),
        fill_mode: "cover".to_string(),
    }];

    if asset.has_overlay() {
        elements.push(Element::Text {
            text: asset.overlay_text.clone(),
            font_family: OVERLAY_FONT_FAMILY.to_string(),
            font_weight: OVERLAY_FONT_WEIGHT.to_string(),
            font_size: asset.font_size.clone(),
            fill_color: OVERLAY_FILL_COLOR.to_string(),
            background_color: OVERLAY_BACKGROUND_COLOR.to_string(),
            padding: OVERLAY_PADDING.to_string(),
            border_radius: OVERLAY_BORDER_RADIUS.to_string(),
            x_alignment: OVERLAY_X_ALIGNMENT.to_string(),
            y_alignment: OVERLAY_Y_ALIGNMENT.to_string(),
            y: OVERLAY_Y.to_string(),
            width: OVERLAY_WIDTH.to_string(),
        });
    }

    Element::Composition {
        track: 1,
        elements,
        duration: clip_duration,
        transition: (index > 0).then(Transition::crossfade),
    }
}
