//! Chart configuration and interaction models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GAP, DEFAULT_OUTER_STROKE_WIDTH, DEFAULT_RADIUS, DEFAULT_STROKE_WIDTH,
    DEFAULT_VALUE_LABEL, TOUCH_PADDING,
};
use crate::errors::{Result, ValidationError};
use crate::geometry::{HitTestParams, Point};
use crate::overlay::OverlayConfig;

/// Caller-facing chart configuration.
///
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartProps {
    /// Ring outer radius (px); the canvas is `2 * radius` square
    pub radius: f64,
    /// Ring thickness (px)
    pub stroke_width: f64,
    /// Emphasis band width outside the ring for the selected segment (px)
    pub outer_stroke_width: f64,
    /// Turn fraction left blank at the start of each segment
    pub gap: f64,
    /// Prefix for the hover tag text
    pub value_label: String,
    /// Radial touch tolerance (px)
    pub touch_padding: f64,
    pub overlay: OverlayConfig,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            outer_stroke_width: DEFAULT_OUTER_STROKE_WIDTH,
            gap: DEFAULT_GAP,
            value_label: DEFAULT_VALUE_LABEL.to_string(),
            touch_padding: TOUCH_PADDING,
            overlay: OverlayConfig::default(),
        }
    }
}

impl ChartProps {
    /// Parses props from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let props: ChartProps = serde_json::from_str(json)?;
        props.validate()?;
        Ok(props)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid(format!("radius must be > 0, got {}", self.radius)));
        }
        check_non_negative("strokeWidth", self.stroke_width)?;
        check_non_negative("outerStrokeWidth", self.outer_stroke_width)?;
        check_non_negative("touchPadding", self.touch_padding)?;
        if !self.gap.is_finite() || !(0.0..1.0).contains(&self.gap) {
            return Err(invalid(format!("gap must be in [0, 1), got {}", self.gap)));
        }
        check_non_negative("overlay.width", self.overlay.width)?;
        check_non_negative("overlay.height", self.overlay.height)?;
        check_non_negative("overlay.margin", self.overlay.margin)?;
        if !self.overlay.offset_x.is_finite() || !self.overlay.offset_y.is_finite() {
            return Err(invalid("overlay offsets must be finite".to_string()));
        }
        Ok(())
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }

    /// Circle along which segment strokes are centered.
    pub fn ring_centerline_radius(&self) -> f64 {
        (self.radius - self.stroke_width / 2.0).max(0.0)
    }

    pub fn hit_test_params(&self) -> HitTestParams {
        HitTestParams {
            radius: self.radius,
            stroke_width: self.stroke_width,
            outer_stroke_width: self.outer_stroke_width,
            padding: self.touch_padding,
        }
    }
}

fn invalid(message: String) -> crate::errors::Error {
    ValidationError::InvalidInput(message).into()
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(format!("{} must be >= 0, got {}", name, value)));
    }
    Ok(())
}

/// One legend row beneath the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub label: String,
    pub color: String,
    pub value: Decimal,
    /// Share of the total (0-100)
    pub percentage: Decimal,
}

/// Pointer input delivered by the host event loop, in chart-local px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
}

impl PointerEvent {
    pub fn down(point: Point) -> Self {
        Self::Down {
            x: point.x,
            y: point.y,
        }
    }

    pub fn moved(point: Point) -> Self {
        Self::Move {
            x: point.x,
            y: point.y,
        }
    }

    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } => Some(Point::new(x, y)),
            Self::Up | Self::Leave => None,
        }
    }
}
