//! Chart events module.
//!
//! Provides the selection event type and the sink trait the interactive
//! chart publishes through. Host adapters implement the sink to forward
//! "item selected" notifications to their own screens.

mod chart_event;
mod sink;

pub use chart_event::*;
pub use sink::*;
