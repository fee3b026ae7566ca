//! Identifiers and a simple allocator for tween handles.

use serde::{Deserialize, Serialize};

/// Handle to a running tween. Opaque to callers; the engine hands one
/// out from [`start`](crate::Engine::start) and accepts it back in
/// [`cancel`](crate::Engine::cancel) and the read accessors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

/// Monotonic allocator for TweenId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_tween: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_tween(&mut self) -> TweenId {
        let id = TweenId(self.next_tween);
        self.next_tween = self.next_tween.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
