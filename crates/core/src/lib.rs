//! FundLens Core - allocation donut chart geometry and interaction.
//!
//! This crate turns caller-supplied `{label, value}` breakdowns into a ring of
//! colored segments, resolves pointer positions to segments, and drives the
//! floating value tag. It has no rendering runtime of its own; hosts feed it
//! pointer events and frame ticks and draw what it computes (or use the SVG
//! export in `render`).

pub mod allocation;
pub mod chart;
pub mod constants;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod overlay;
pub mod render;
pub mod segments;

// Re-export the types most hosts need
pub use chart::{ChartLayout, ChartProps, DonutChart, LegendItem, PointerEvent};
pub use segments::{ChartEntry, Segment};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
