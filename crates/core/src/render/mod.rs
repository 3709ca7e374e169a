//! Render module - SVG serialization of chart frames.

mod svg;


pub use svg::{render_chart_svg, render_layout_svg};
