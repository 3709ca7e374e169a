//! Segments module - chart input entries and their normalized proportions.

mod segments_model;
mod segments_service;


pub use segments_model::{ChartEntry, Segment};
pub use segments_service::{
    build_segments, build_segments_with_total, color_for_index, total_value,
};
