//! Engine: tween ownership and public API with per-frame advance + sweep.
//!
//! Methods:
//! - new, with_config, start, start_simple, start_with, cancel, step, read accessors

use tracing::{debug, warn};

use crate::config::{EngineConfig, TweenConfig};
use crate::easing::Easing;
use crate::error::TweenError;
use crate::ids::{IdAllocator, TweenId};
use crate::listener::StepListener;
use crate::metrics::EngineMetrics;
use crate::outputs::{StepOutputs, TweenEvent};
use crate::tween::Tween;
use crate::Result;

/// One registry entry: a tween plus the listener receiving its output.
struct Entry {
    id: TweenId,
    tween: Tween,
    listener: Box<dyn StepListener>,
}

/// Push an event unless the per-pass buffer is already full.
fn push_bounded(outputs: &mut StepOutputs, max_events: usize, event: TweenEvent) {
    if outputs.len() < max_events {
        outputs.push_event(event);
    } else {
        warn!("step: event buffer full, dropping {:?}", event);
    }
}

/// Frame-stepped tween engine.
///
/// One host thread owns the engine, starts tweens against it, and calls
/// [`step`](Engine::step) once per frame with its time delta. The engine
/// never reads a clock; time only moves when the host says so.
pub struct Engine {
    // Owned data
    cfg: EngineConfig,
    ids: IdAllocator,
    entries: Vec<Entry>,

    // Events staged between passes (starts), absorbed at the next step.
    pending_events: Vec<TweenEvent>,

    // Per-pass outputs
    outputs: StepOutputs,
    metrics: EngineMetrics,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(cfg: EngineConfig) -> Self {
        Self {
            ids: IdAllocator::new(),
            entries: Vec::with_capacity(cfg.capacity),
            pending_events: Vec::new(),
            outputs: StepOutputs::default(),
            metrics: EngineMetrics::new(),
            cfg,
        }
    }

    /// Start a tween, returning its handle.
    ///
    /// `duration` is in seconds and must be finite and strictly
    /// positive; `amplitude` must be finite (zero and negative are
    /// legal). The first callback fires on the next [`step`](Engine::step).
    pub fn start<L>(
        &mut self,
        easing: Easing,
        amplitude: f64,
        duration: f64,
        listener: L,
    ) -> Result<TweenId>
    where
        L: StepListener + 'static,
    {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TweenError::InvalidDuration { duration });
        }
        if !amplitude.is_finite() {
            return Err(TweenError::InvalidAmplitude { amplitude });
        }
        let id = self.ids.alloc_tween();
        self.entries.push(Entry {
            id,
            tween: Tween::new(easing, amplitude, duration),
            listener: Box::new(listener),
        });
        self.pending_events.push(TweenEvent::Started { id });
        self.metrics.tweens_started += 1;
        debug!(
            "start: {:?} {} amplitude {} duration {}s",
            id,
            easing.name(),
            amplitude,
            duration
        );
        Ok(id)
    }

    /// Start a tween with unit amplitude.
    pub fn start_simple<L>(&mut self, easing: Easing, duration: f64, listener: L) -> Result<TweenId>
    where
        L: StepListener + 'static,
    {
        self.start(easing, 1.0, duration, listener)
    }

    /// Start a tween from a declarative config.
    pub fn start_with<L>(&mut self, config: TweenConfig, listener: L) -> Result<TweenId>
    where
        L: StepListener + 'static,
    {
        self.start(config.easing, config.amplitude, config.duration, listener)
    }

    /// Cancel a tween.
    ///
    /// Fire-and-forget: unknown or already-stopped handles are a no-op.
    /// No further callbacks fire for a cancelled tween; its entry is
    /// swept (and a `Cancelled` event emitted) at the end of the next
    /// step pass.
    pub fn cancel(&mut self, id: TweenId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            if !entry.tween.is_stopped() {
                entry.tween.stop();
                debug!("cancel: {:?}", id);
            }
        }
    }

    /// Advance every running tween by `dt` seconds and deliver callbacks.
    ///
    /// Tweens advance in insertion order. A tween reaching its duration
    /// is clamped there, delivers one final callback with progress 1.0,
    /// and is retired along with any cancelled entries in a single sweep
    /// after the loop. Returns the lifecycle events gathered since the
    /// previous pass.
    ///
    /// Non-finite `dt` is a host bug and propagates into progress
    /// unchecked; `dt <= 0` advances nothing and is harmless.
    pub fn step(&mut self, dt: f64) -> &StepOutputs {
        self.outputs.clear();
        self.metrics.steps += 1;

        // Absorb lifecycle events staged since the previous pass.
        let staged = std::mem::take(&mut self.pending_events);
        for event in staged {
            push_bounded(&mut self.outputs, self.cfg.max_events_per_step, event);
        }

        // Advance live tweens. Entries cancelled since the previous
        // pass stay untouched here and are swept below.
        for entry in &mut self.entries {
            if entry.tween.is_stopped() {
                continue;
            }
            let update = entry.tween.advance(dt);
            entry.listener.on_step(update);
            self.metrics.updates_delivered += 1;
        }

        // Deferred removal: one sweep retires everything stopped.
        let Self {
            cfg,
            entries,
            outputs,
            metrics,
            ..
        } = self;
        entries.retain(|entry| {
            if !entry.tween.is_stopped() {
                return true;
            }
            let event = if entry.tween.is_complete() {
                metrics.tweens_completed += 1;
                debug!("step: {:?} completed", entry.id);
                TweenEvent::Completed { id: entry.id }
            } else {
                metrics.tweens_cancelled += 1;
                debug!("step: {:?} swept after cancel", entry.id);
                TweenEvent::Cancelled { id: entry.id }
            };
            push_bounded(outputs, cfg.max_events_per_step, event);
            false
        });

        &self.outputs
    }

    /// Inspect a live tween's state.
    pub fn tween(&self, id: TweenId) -> Option<&Tween> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.tween)
    }

    /// True when the handle no longer refers to a running tween.
    /// Handles already swept from the registry count as stopped.
    pub fn is_stopped(&self, id: TweenId) -> bool {
        self.tween(id).map_or(true, |t| t.is_stopped())
    }

    /// Number of registered tweens, including those awaiting sweep
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tweens are registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events gathered by the most recent pass
    #[inline]
    pub fn outputs(&self) -> &StepOutputs {
        &self.outputs
    }

    /// Counters accumulated since construction or the last reset
    #[inline]
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Reset the activity counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// The configuration this engine was built with
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
