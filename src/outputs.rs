//! Output contracts from the engine step pass.
//!
//! Listeners receive continuous per-tween values; StepOutputs carries
//! the discrete lifecycle signals gathered since the previous pass.

use serde::{Deserialize, Serialize};

use crate::ids::TweenId;

/// Discrete lifecycle signals emitted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenEvent {
    /// The tween entered the registry.
    Started { id: TweenId },
    /// The tween reached its full duration and was retired.
    Completed { id: TweenId },
    /// The tween was cancelled and swept without completing.
    Cancelled { id: TweenId },
}

/// Events returned by Engine::step().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StepOutputs {
    #[serde(default)]
    pub events: Vec<TweenEvent>,
}

impl StepOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: TweenEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
