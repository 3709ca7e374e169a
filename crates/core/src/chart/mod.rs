//! Chart module - props, the pure ring + legend layout, and the interactive chart.

mod chart_layout;
mod chart_model;
mod donut_chart;

#[cfg(test)]
mod chart_layout_tests;
#[cfg(test)]
mod donut_chart_tests;

pub use chart_layout::ChartLayout;
pub use chart_model::{ChartProps, LegendItem, PointerEvent};
pub use donut_chart::DonutChart;
