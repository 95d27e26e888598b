//! Declarative render specification sent to the render engine.
//!
//! Field names and the element nesting follow the engine's JSON contract:
//! the top-level source holds an ordered element list, and each scene is a
//! `composition` element whose children (video + optional text) share the
//! scene's local timeline. Keeping the text inside the scene composition,
//! rather than on a parallel track, pins it to exactly that scene no
//! matter how transitions shift absolute start times.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Container format of the rendered output.
pub const OUTPUT_FORMAT: &str = "mp4";
/// Output frame width (portrait).
pub const OUTPUT_WIDTH: u32 = 1080;
/// Output frame height (portrait).
pub const OUTPUT_HEIGHT: u32 = 1920;
/// Output frame rate.
pub const FRAME_RATE: u32 = 30;
/// Fixed crossfade overlap between adjacent scenes, in seconds.
pub const CROSSFADE_SECONDS: f64 = 1.0;

/// One element of the render specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A media layer. `fill_mode` is `"cover"` so the media fills the
    /// scene frame; width/height are inherited from the parent.
    Video {
        source: String,
        fill_mode: String,
    },
    /// A styled overlay-text layer. No time bounds, so it spans the whole
    /// parent composition even when the media underneath is trimmed.
    Text {
        text: String,
        font_family: String,
        font_weight: String,
        font_size: String,
        fill_color: String,
        background_color: String,
        padding: String,
        border_radius: String,
        x_alignment: String,
        y_alignment: String,
        y: String,
        width: String,
    },
    /// One scene: a composite of media + optional text on its own local
    /// timeline. `duration` trims the scene when a uniform clip length was
    /// computed; `transition` is the incoming crossfade, absent on the
    /// first scene only.
    Composition {
        track: u32,
        elements: Vec<Element>,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        transition: Option<Transition>,
    },
}

/// Transition kind token understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Crossfade,
}

/// An incoming scene transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transition {
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    pub duration: f64,
}

impl Transition {
    /// The fixed 1-second crossfade used between adjacent scenes.
    pub fn crossfade() -> Self {
        Self {
            kind: TransitionKind::Crossfade,
            duration: CROSSFADE_SECONDS,
        }
    }
}

/// The full render job source: output settings plus the ordered scene
/// list. Scene order here is the final timeline order; reordering it is a
/// correctness bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderSpec {
    pub output_format: String,
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
    pub elements: Vec<Element>,
}

impl RenderSpec {
    /// Wrap an ordered scene list in the fixed portrait output settings.
    pub fn portrait(elements: Vec<Element>) -> Self {
        Self {
            output_format: OUTPUT_FORMAT.to_string(),
            width: OUTPUT_WIDTH,
            height: OUTPUT_HEIGHT,
            frame_rate: FRAME_RATE,
            elements,
        }
    }

    /// Number of top-level scenes.
    pub fn scene_count(&self) -> usize {
        self.elements.len()
    }
}
