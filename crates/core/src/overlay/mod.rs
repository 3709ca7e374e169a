//! Overlay module - the floating value tag that follows the pointer.

mod animation;
mod overlay_model;
mod overlay_service;


pub use animation::{ease_in_out_quad, OpacityAnimation};
pub use overlay_model::{LabelContent, OverlayConfig};
pub use overlay_service::{clamp_label_position, LabelOverlay};
