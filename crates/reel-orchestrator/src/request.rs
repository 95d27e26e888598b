//! Caller-facing request types.
//!
//! Wire names are camelCase to match the creative frontend's form
//! payloads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use reel_models::{MediaAsset, TargetDuration, DEFAULT_FONT_SIZE};

/// One media item with a resolved durable URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    /// Durable, publicly retrievable media URL
    pub url: String,
    /// Overlay text; empty means no overlay for this scene
    #[serde(default)]
    pub text: String,
    /// Overlay font size token
    #[serde(default = "default_font_size")]
    pub font_size: String,
}

fn default_font_size() -> String {
    DEFAULT_FONT_SIZE.to_string()
}

/// A full render request: ordered media items plus the duration selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub media_items: Vec<RenderItem>,
    #[serde(default)]
    pub target_duration: TargetDuration,
}

impl RenderRequest {
    /// The request's items as indexed media assets, in input order.
    pub fn to_assets(&self) -> Vec<MediaAsset> {
        self.media_items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                MediaAsset::new(index, &item.url, &item.text, &item.font_size)
            })
            .collect()
    }
}

/// One not-yet-uploaded media item: a local file plus overlay settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalMediaItem {
    pub path: PathBuf,
    pub text: String,
    pub font_size: String,
}

impl LocalMediaItem {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            font_size: default_font_size(),
        }
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }
}
