//! Allocation breakdowns (asset class, sector, region) as chart input.

mod allocation_model;

pub use allocation_model::*;
