//! Geometry module - ring arcs, turn fractions and pointer hit testing.

mod arc;
mod point;


pub use arc::{arc_path, arc_spans, partition_spans, point_at_turn, TurnSpan};
pub use hit_test::{hit_test, segment_at_turn, touch_fraction, HitTestParams};
pub use point::Point;
