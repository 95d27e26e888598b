//! Input media assets and the caller's duration selector.

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Font size token used when the caller does not pick one.
///
/// Engine-relative units so the overlay scales with the output frame.
pub const DEFAULT_FONT_SIZE: &str = "6 vmin";

/// One input to a scene: a durable media URL plus its overlay settings.
///
/// The `scene_index` is the asset's position in the final video and is
/// stable from creation through job submission; the compiled scene order
/// must match it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MediaAsset {
    /// Durable, publicly retrievable source URL
    pub source_url: String,

    /// Overlay text for this scene; empty or whitespace-only means no overlay
    #[serde(default)]
    pub overlay_text: String,

    /// Overlay font size token (engine units, e.g. "6 vmin")
    #[serde(default = "default_font_size")]
    pub font_size: String,

    /// Zero-based position of this scene in the final video
    pub scene_index: usize,
}

fn default_font_size() -> String {
    DEFAULT_FONT_SIZE.to_string()
}

impl MediaAsset {
    /// Create an asset with overlay text at the given scene position.
    pub fn new(
        scene_index: usize,
        source_url: impl Into<String>,
        overlay_text: impl Into<String>,
        font_size: impl Into<String>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            overlay_text: overlay_text.into(),
            font_size: font_size.into(),
            scene_index,
        }
    }

    /// Create an asset with no overlay text.
    pub fn without_overlay(scene_index: usize, source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            overlay_text: String::new(),
            font_size: default_font_size(),
            scene_index,
        }
    }

    /// Whether this asset carries a visible overlay (non-whitespace text).
    pub fn has_overlay(&self) -> bool {
        !self.overlay_text.trim().is_empty()
    }
}

/// The caller's target-duration selector.
///
/// Serialized as the string `"original"` (keep each clip's native length)
/// or a number of seconds. Numeric strings are accepted on input because
/// the upstream form submits the selector as a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetDuration {
    /// Keep each clip's native length; no trimming
    Original,
    /// Make the rendered total this many seconds
    Seconds(f64),
}

impl TargetDuration {
    /// The requested total in seconds, or `None` for `Original`.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            TargetDuration::Original => None,
            TargetDuration::Seconds(s) => Some(*s),
        }
    }
}

impl Default for TargetDuration {
    fn default() -> Self {
        TargetDuration::Original
    }
}

impl Serialize for TargetDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TargetDuration::Original => serializer.serialize_str("original"),
            TargetDuration::Seconds(s) => serializer.serialize_f64(*s),
        }
    }
}

impl<'de> Deserialize<'de> for TargetDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(s) => Ok(TargetDuration::Seconds(s)),
            Repr::Text(t) if t == "original" => Ok(TargetDuration::Original),
            Repr::Text(t) => t
                .trim()
                .parse::<f64>()
                .map(TargetDuration::Seconds)
                .map_err(|_| {
                    de::Error::custom(format!(
                        "expected \"original\" or a number of seconds, got {:?}",
                        t
                    ))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_detection() {
        let with_text = MediaAsset::new(0, "https://cdn.example/a.jpg", "こんにちは", "6 vmin");
        assert!(with_text.has_overlay());

        let blank = MediaAsset::new(1, "https://cdn.example/b.jpg", "   \n ", "6 vmin");
        assert!(!blank.has_overlay());

        let none = MediaAsset::without_overlay(2, "https://cdn.example/c.jpg");
        assert!(!none.has_overlay());
        assert_eq!(none.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_target_duration_serde() {
        let original: TargetDuration = serde_json::from_str("\"original\"").unwrap();
        assert_eq!(original, TargetDuration::Original);
        assert_eq!(original.seconds(), None);

        let numeric: TargetDuration = serde_json::from_str("15").unwrap();
        assert_eq!(numeric, TargetDuration::Seconds(15.0));

        // Form values arrive as strings
        let stringly: TargetDuration = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(stringly.seconds(), Some(30.0));

        assert!(serde_json::from_str::<TargetDuration>("\"soon\"").is_err());

        assert_eq!(
            serde_json::to_string(&TargetDuration::Original).unwrap(),
            "\"original\""
        );
        assert_eq!(
            serde_json::to_string(&TargetDuration::Seconds(15.0)).unwrap(),
            "15.0"
        );
    }

    #[test]
    fn test_asset_defaults_from_json() {
        let asset: MediaAsset = serde_json::from_str(
            r#"{"source_url": "https://cdn.example/a.mp4", "scene_index": 0}"#,
        )
        .unwrap();
        assert_eq!(asset.overlay_text, "");
        assert_eq!(asset.font_size, DEFAULT_FONT_SIZE);
    }
}
