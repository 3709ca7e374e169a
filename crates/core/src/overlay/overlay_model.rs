//! Label overlay configuration and content models.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    LABEL_FADE_DURATION, LABEL_HEIGHT, LABEL_MARGIN, LABEL_OFFSET_X, LABEL_OFFSET_Y, LABEL_WIDTH,
};

/// Placement and timing of the value tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Offset of the tag's top-left corner from the pointer (px)
    pub offset_x: f64,
    pub offset_y: f64,
    /// Tag size (px)
    pub width: f64,
    pub height: f64,
    /// Minimum gap to the canvas edge (px)
    pub margin: f64,
    /// Fade in/out duration in milliseconds
    pub fade_duration_ms: u64,
}

impl OverlayConfig {
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            offset_x: LABEL_OFFSET_X,
            offset_y: LABEL_OFFSET_Y,
            width: LABEL_WIDTH,
            height: LABEL_HEIGHT,
            margin: LABEL_MARGIN,
            fade_duration_ms: LABEL_FADE_DURATION.as_millis() as u64,
        }
    }
}

/// What the tag shows for the hovered segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelContent {
    /// Swatch color, the segment's assigned color
    pub color: String,
    /// Caller prefix followed by the segment's raw value
    pub text: String,
}
