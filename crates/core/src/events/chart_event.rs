//! Chart event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the interactive chart when its selection changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartEvent {
    /// The pointer moved onto a segment.
    SegmentSelected { index: usize, label: String },

    /// The pointer left the ring, was lifted, or the data changed.
    SelectionCleared,
}

impl ChartEvent {
    /// Creates a SegmentSelected event.
    pub fn segment_selected(index: usize, label: impl Into<String>) -> Self {
        Self::SegmentSelected {
            index,
            label: label.into(),
        }
    }

    /// Selected index, if this is a selection.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::SegmentSelected { index, .. } => Some(*index),
            Self::SelectionCleared => None,
        }
    }
}
