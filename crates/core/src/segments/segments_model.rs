//! Segment domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One caller-supplied data point for the chart (e.g. a holding or a sector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    /// Display name; does not need to be unique
    pub label: String,
    /// Raw magnitude, must be >= 0
    pub value: Decimal,
}

impl ChartEntry {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One wedge of the donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub label: String,
    pub value: Decimal,
    /// Hex color taken from the palette by index
    pub color: String,
    /// Share of the total, rounded to 2 decimal places (0-1)
    pub proportion: Decimal,
}
