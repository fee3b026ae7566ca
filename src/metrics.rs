use serde::{Deserialize, Serialize};

/// Running counters for engine activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMetrics {
    /// Number of step passes executed
    pub steps: u64,
    /// Number of listener updates delivered
    pub updates_delivered: u64,
    /// Number of tweens started
    pub tweens_started: u64,
    /// Number of tweens that ran to completion
    pub tweens_completed: u64,
    /// Number of tweens cancelled before completing
    pub tweens_cancelled: u64,
}

impl EngineMetrics {
    /// Create new metrics
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tweens retired for any reason
    #[inline]
    pub fn tweens_retired(&self) -> u64 {
        self.tweens_completed + self.tweens_cancelled
    }

    /// Average listener updates per step pass
    #[inline]
    pub fn updates_per_step(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.updates_delivered as f64 / self.steps as f64
        }
    }

    /// Reset all counters
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_per_step_handles_zero_steps() {
        let metrics = EngineMetrics::new();
        assert_eq!(metrics.updates_per_step(), 0.0);
    }

    #[test]
    fn reset_clears_counters() {
        let mut metrics = EngineMetrics::new();
        metrics.steps = 3;
        metrics.tweens_completed = 2;
        metrics.reset();
        assert_eq!(metrics, EngineMetrics::default());
    }
}
