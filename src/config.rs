//! Engine sizing and declarative tween configuration.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::Result;

/// Configuration for engine sizing.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial capacity hint for the tween registry.
    pub capacity: usize,
    /// Maximum events to retain per step before the drop policy applies.
    pub max_events_per_step: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: 16,
            max_events_per_step: 256,
        }
    }
}

fn default_amplitude() -> f64 {
    1.0
}

/// Declarative start parameters for a tween.
///
/// Validation happens in [`Engine::start_with`](crate::Engine::start_with),
/// not here; a parsed config may still be rejected at start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenConfig {
    /// Curve to follow
    #[serde(default)]
    pub easing: Easing,
    /// Output scale applied to the eased value
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Total duration in seconds
    pub duration: f64,
}

impl TweenConfig {
    /// Create a config with the default linear curve and unit amplitude
    pub fn new(duration: f64) -> Self {
        Self {
            easing: Easing::default(),
            amplitude: default_amplitude(),
            duration,
        }
    }

    /// Set the curve
    #[inline]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the output scale
    #[inline]
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Parse a config from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TweenError;

    #[test]
    fn engine_config_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.capacity, 16);
        assert_eq!(cfg.max_events_per_step, 256);
    }

    #[test]
    fn tween_config_from_json_applies_defaults() {
        let cfg = TweenConfig::from_json_str(r#"{"duration": 2.0}"#).unwrap();
        assert_eq!(cfg.easing, Easing::Linear);
        assert_eq!(cfg.amplitude, 1.0);
        assert_eq!(cfg.duration, 2.0);
    }

    #[test]
    fn tween_config_from_json_full() {
        let cfg =
            TweenConfig::from_json_str(r#"{"easing":"QuadOut","amplitude":2.5,"duration":0.5}"#)
                .unwrap();
        assert_eq!(cfg.easing, Easing::QuadOut);
        assert_eq!(cfg.amplitude, 2.5);
        assert_eq!(cfg.duration, 0.5);
    }

    #[test]
    fn tween_config_builders() {
        let cfg = TweenConfig::new(1.5)
            .with_easing(Easing::BounceOut)
            .with_amplitude(-2.0);
        assert_eq!(cfg.easing, Easing::BounceOut);
        assert_eq!(cfg.amplitude, -2.0);
        assert_eq!(cfg.duration, 1.5);
    }

    #[test]
    fn tween_config_bad_json_is_serialization_error() {
        let err = TweenConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, TweenError::Serialization { .. }));
    }
}
