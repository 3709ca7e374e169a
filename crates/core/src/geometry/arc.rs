//! Ring segment spans and their SVG arc paths.
//!
//! Angles are turn fractions: 0 is 3 o'clock and values grow clockwise in the
//! y-down canvas, matching `atan2(dy, dx)` on screen coordinates.

use std::f64::consts::TAU;
use std::fmt::Write;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Point;
use crate::segments::Segment;

/// A `[start, end)` interval of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnSpan {
    pub start: f64,
    pub end: f64,
}

impl TurnSpan {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Half-open containment.
    pub fn contains(&self, turn: f64) -> bool {
        turn >= self.start && turn < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn start_degrees(&self) -> f64 {
        self.start * 360.0
    }

    pub fn end_degrees(&self) -> f64 {
        self.end * 360.0
    }
}

/// Drawn span for every segment.
///
/// Segment `i` starts at `gap` plus the proportions before it and ends at the
/// running total through it. The last segment always ends at exactly 1 so the
/// ring closes whatever the rounding drift.
pub fn arc_spans(segments: &[Segment], gap: f64) -> Vec<TurnSpan> {
    let last = segments.len().saturating_sub(1);
    let mut accumulated = Decimal::ZERO;

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let before = to_turn(accumulated);
            accumulated += segment.proportion;
            let start = gap + before;
            let end = if i == last { 1.0 } else { to_turn(accumulated) };
            TurnSpan::new(start, end)
        })
        .collect()
}

/// Un-gapped cumulative intervals, the partition used for hit testing.
pub fn partition_spans(segments: &[Segment]) -> Vec<TurnSpan> {
    let mut accumulated = Decimal::ZERO;

    segments
        .iter()
        .map(|segment| {
            let start = to_turn(accumulated);
            accumulated += segment.proportion;
            TurnSpan::new(start, to_turn(accumulated))
        })
        .collect()
}

/// Point on the circle of `radius` around `center` at the given turn.
pub fn point_at_turn(center: Point, radius: f64, turn: f64) -> Point {
    let angle = turn * TAU;
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// SVG path data for an arc along the circle of `radius` around `center`.
///
/// Returns `None` for empty spans. A span covering the full turn is split in
/// two half arcs since a single SVG arc cannot end where it starts.
pub fn arc_path(center: Point, radius: f64, span: TurnSpan) -> Option<String> {
    if span.is_empty() || radius <= 0.0 {
        return None;
    }

    let from = point_at_turn(center, radius, span.start);
    let mut d = String::new();
    let _ = write!(d, "M {:.2} {:.2}", from.x, from.y);

    if span.length() >= 1.0 - f64::EPSILON {
        let mid = point_at_turn(center, radius, span.start + 0.5);
        let _ = write!(
            d,
            " A {r:.2} {r:.2} 0 0 1 {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2}",
            mid.x,
            mid.y,
            from.x,
            from.y,
            r = radius
        );
    } else {
        let to = point_at_turn(center, radius, span.end);
        let large_arc = u8::from(span.length() > 0.5);
        let _ = write!(
            d,
            " A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2}",
            to.x,
            to.y,
            r = radius
        );
    }

    Some(d)
}

fn to_turn(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
