//! Tween Engine
//!
//! A frame-stepped easing and tween lifecycle engine. Hosts start
//! tweens (curve + amplitude + duration + step listener), then call
//! [`Engine::step`] once per frame with their time delta; the engine
//! advances every running tween, delivers progress/value/delta to its
//! listener, and retires tweens that complete or are cancelled.
//!
//! The engine is single-threaded and time-passive: it never reads a
//! clock, and all callbacks fire synchronously inside `step`.

pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod ids;
pub mod listener;
pub mod metrics;
pub mod outputs;
pub mod tween;

// Re-export common types for convenience
pub use config::{EngineConfig, TweenConfig};
pub use easing::Easing;
pub use engine::Engine;
pub use error::TweenError;
pub use ids::TweenId;
pub use listener::{channel_listener, CollectingListener, StepListener, StepUpdate};
pub use metrics::EngineMetrics;
pub use outputs::{StepOutputs, TweenEvent};
pub use tween::Tween;

/// Tween engine result type
pub type Result<T> = core::result::Result<T, TweenError>;
