//! Per-tween state: curve, scale, timing, and the advance/clamp rule.

use serde::Serialize;

use crate::easing::Easing;
use crate::listener::StepUpdate;

/// A single running tween owned by the engine.
///
/// Hosts read this through [`Engine::tween`](crate::Engine::tween);
/// all mutation happens inside the engine's step pass.
#[derive(Debug, Clone, Serialize)]
pub struct Tween {
    easing: Easing,
    amplitude: f64,
    duration: f64,
    elapsed: f64,
    last_value: f64,
    stopped: bool,
}

impl Tween {
    pub(crate) fn new(easing: Easing, amplitude: f64, duration: f64) -> Self {
        Self {
            easing,
            amplitude,
            duration,
            elapsed: 0.0,
            last_value: 0.0,
            stopped: false,
        }
    }

    /// Advance by `dt` seconds and produce this frame's output.
    ///
    /// Elapsed time is clamped to `[0, duration]`; reaching the end
    /// marks the tween stopped, with this final update still reporting
    /// progress 1.0 exactly.
    pub(crate) fn advance(&mut self, dt: f64) -> StepUpdate {
        self.elapsed = (self.elapsed + dt).clamp(0.0, self.duration);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.stopped = true;
        }
        let progress = self.elapsed / self.duration;
        let value = self.easing.ease(progress) * self.amplitude;
        let delta = value - self.last_value;
        self.last_value = value;
        StepUpdate {
            progress,
            value,
            delta,
        }
    }

    pub(crate) fn stop(&mut self) {
        self.stopped = true;
    }

    /// The curve this tween follows
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Output scale applied to the eased value
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Total duration in seconds
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds advanced so far, clamped to `[0, duration]`
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Normalized progress in `[0,1]`
    #[inline]
    pub fn progress(&self) -> f64 {
        self.elapsed / self.duration
    }

    /// Output delivered on the most recent step
    #[inline]
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// True once cancelled or completed
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True once elapsed has reached the full duration
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_and_clamps() {
        let mut tween = Tween::new(Easing::Linear, 1.0, 4.0);
        let update = tween.advance(1.0);
        assert_eq!(update.progress, 0.25);
        assert!(!tween.is_stopped());

        let update = tween.advance(10.0);
        assert_eq!(update.progress, 1.0);
        assert_eq!(tween.elapsed(), 4.0);
        assert!(tween.is_stopped());
        assert!(tween.is_complete());
    }

    #[test]
    fn negative_dt_does_not_underflow() {
        let mut tween = Tween::new(Easing::Linear, 1.0, 4.0);
        let update = tween.advance(-2.0);
        assert_eq!(update.progress, 0.0);
        assert_eq!(tween.elapsed(), 0.0);
        assert!(!tween.is_stopped());
    }

    #[test]
    fn delta_telescopes() {
        let mut tween = Tween::new(Easing::QuadOut, 3.0, 2.0);
        let first = tween.advance(1.0);
        let second = tween.advance(1.0);
        assert_eq!(first.delta + second.delta, second.value);
        assert_eq!(tween.last_value(), second.value);
    }
}
