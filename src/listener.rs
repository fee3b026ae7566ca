//! Step callback capability: how per-frame tween output reaches the host.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// One frame of output for a single tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepUpdate {
    /// Normalized progress in `[0,1]`, clamped.
    pub progress: f64,
    /// Eased output, already scaled by the tween's amplitude.
    pub value: f64,
    /// Change in `value` since the previous step of this tween.
    pub delta: f64,
}

/// Receiver of per-step tween output.
///
/// The engine invokes listeners synchronously from
/// [`step`](crate::Engine::step), in tween insertion order. A listener
/// cannot call back into the engine mid-pass; record the wish to start
/// or cancel something and apply it after `step` returns.
pub trait StepListener {
    /// Handle one step of output
    fn on_step(&mut self, update: StepUpdate);
}

/// Any `FnMut(StepUpdate)` closure is a listener.
impl<F: FnMut(StepUpdate)> StepListener for F {
    fn on_step(&mut self, update: StepUpdate) {
        self(update)
    }
}

/// Adapt an mpsc sender into a listener.
///
/// A closed receiver is not an error; updates are silently dropped.
/// Useful for listeners that want to cancel their own tween: send the
/// updates out, inspect them after `step` returns, then cancel.
pub fn channel_listener(sender: Sender<StepUpdate>) -> impl StepListener {
    move |update: StepUpdate| {
        let _ = sender.send(update);
    }
}

/// Listener that records every update for later inspection.
///
/// Cloning shares the underlying buffer, so a caller can keep one
/// handle and give the engine the other half via
/// [`listener`](CollectingListener::listener).
#[derive(Debug, Clone, Default)]
pub struct CollectingListener {
    updates: Rc<RefCell<Vec<StepUpdate>>>,
}

impl CollectingListener {
    /// Create a new collecting listener
    pub fn new() -> Self {
        Self::default()
    }

    /// The listener half to hand to the engine.
    pub fn listener(&self) -> impl StepListener + 'static {
        let updates = Rc::clone(&self.updates);
        move |update: StepUpdate| updates.borrow_mut().push(update)
    }

    /// Snapshot of all recorded updates
    pub fn updates(&self) -> Vec<StepUpdate> {
        self.updates.borrow().clone()
    }

    /// The most recent update, if any
    pub fn last(&self) -> Option<StepUpdate> {
        self.updates.borrow().last().copied()
    }

    /// Number of recorded updates
    pub fn len(&self) -> usize {
        self.updates.borrow().len()
    }

    /// True if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.updates.borrow().is_empty()
    }

    /// Drop all recorded updates
    pub fn clear(&self) {
        self.updates.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(progress: f64) -> StepUpdate {
        StepUpdate {
            progress,
            value: progress,
            delta: 0.0,
        }
    }

    #[test]
    fn collecting_listener_shares_buffer() {
        let collector = CollectingListener::new();
        let mut listener = collector.listener();
        listener.on_step(update(0.25));
        listener.on_step(update(0.5));
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.last().map(|u| u.progress), Some(0.5));
        collector.clear();
        assert!(collector.is_empty());
    }

    #[test]
    fn closure_is_a_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |u: StepUpdate| seen.push(u.value);
            listener.on_step(update(1.0));
        }
        assert_eq!(seen, vec![1.0]);
    }

    #[test]
    fn channel_listener_survives_closed_receiver() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut listener = channel_listener(tx);
        listener.on_step(update(0.1));
        assert_eq!(rx.try_recv().map(|u| u.progress), Ok(0.1));
        drop(rx);
        listener.on_step(update(0.2));
    }
}
