//! Error types for the tween engine

use serde::{Deserialize, Serialize};

/// Error type for tween operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// Duration must be finite and strictly positive
    #[error("Invalid duration: {duration}")]
    InvalidDuration { duration: f64 },

    /// Amplitude must be finite (zero and negative are fine)
    #[error("Invalid amplitude: {amplitude}")]
    InvalidAmplitude { amplitude: f64 },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl TweenError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } | Self::InvalidAmplitude { .. } => "validation",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TweenError::InvalidDuration { duration: -1.0 };
        assert_eq!(error.to_string(), "Invalid duration: -1");
    }

    #[test]
    fn test_error_categories() {
        let validation = TweenError::InvalidDuration { duration: 0.0 };
        assert_eq!(validation.category(), "validation");

        let serialization = TweenError::Serialization {
            reason: "bad json".to_string(),
        };
        assert_eq!(serialization.category(), "serialization");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let error = TweenError::InvalidAmplitude { amplitude: -3.5 };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: TweenError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: TweenError = parse_err.into();
        assert!(matches!(error, TweenError::Serialization { .. }));
    }
}
