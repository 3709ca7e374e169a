//! Label overlay state: clamped position and animated opacity.

use std::time::Duration;

use crate::geometry::Point;

use super::{LabelContent, OpacityAnimation, OverlayConfig};

/// Clamps one axis of the tag into `[margin, extent - size - margin]`.
fn clamp_axis(position: f64, size: f64, extent: f64, margin: f64) -> f64 {
    let mut clamped = position;
    if clamped + size > extent {
        clamped = extent - size - margin;
    }
    if clamped < margin {
        clamped = margin;
    }
    clamped
}

/// Tag position for a raw pointer position on a canvas of side `diameter`.
pub fn clamp_label_position(pointer: Point, diameter: f64, config: &OverlayConfig) -> Point {
    Point::new(
        clamp_axis(
            pointer.x + config.offset_x,
            config.width,
            diameter,
            config.margin,
        ),
        clamp_axis(
            pointer.y + config.offset_y,
            config.height,
            diameter,
            config.margin,
        ),
    )
}

/// Floating tag tracking the pointer.
///
/// Position updates apply immediately; only opacity is animated.
#[derive(Debug, Clone)]
pub struct LabelOverlay {
    config: OverlayConfig,
    position: Point,
    opacity: OpacityAnimation,
    content: Option<LabelContent>,
}

impl LabelOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        let opacity = OpacityAnimation::new(0.0, config.fade_duration());
        Self {
            config,
            position: Point::default(),
            opacity,
            content: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: OverlayConfig) {
        self.opacity.set_duration(config.fade_duration());
        self.config = config;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> Option<&LabelContent> {
        self.content.as_ref()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some() && self.opacity() > 0.0
    }

    pub fn is_animating(&self) -> bool {
        !self.opacity.is_settled()
    }

    /// Moves the tag next to the pointer, clamped to the canvas.
    pub fn track(&mut self, pointer: Point, diameter: f64) {
        self.position = clamp_label_position(pointer, diameter, &self.config);
    }

    /// Fades in with the given content.
    pub fn show(&mut self, content: LabelContent) {
        self.content = Some(content);
        self.opacity.retarget(1.0);
    }

    /// Fades out; the last content stays until the fade completes.
    pub fn hide(&mut self) {
        self.opacity.retarget(0.0);
    }

    pub fn advance(&mut self, dt: Duration) {
        self.opacity.advance(dt);
        if self.opacity.is_settled() && self.opacity.target() == 0.0 {
            self.content = None;
        }
    }
}

impl Default for LabelOverlay {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}
