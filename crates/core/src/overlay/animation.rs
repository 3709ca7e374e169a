//! Time-driven opacity tween.

use std::time::Duration;

/// Quadratic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Opacity animating toward a target over a fixed duration.
///
/// Retargeting mid-flight restarts the tween from the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityAnimation {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
}

impl OpacityAnimation {
    /// Starts settled at `value`.
    pub fn new(value: f64, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value(&self) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_in_out_quad(progress)
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn retarget(&mut self, target: f64) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.elapsed = self.elapsed.min(duration);
    }
}
