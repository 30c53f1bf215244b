//! Automatic slide advance while presenting.
//!
//! [`AutoAdvance`] owns its `slint::Timer`. Stopping it, or dropping the
//! owner, cancels any pending tick.

use crate::config::EditorConfig;
use slint::{Timer, TimerMode};
use std::time::Duration;

/// Index that follows `current` in a deck of `len` slides, wrapping back
/// to the first slide. `None` for an empty deck.
pub fn next_slide_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current + 1) % len)
}

pub struct AutoAdvance {
    timer: Timer,
    interval: Duration,
    enabled: bool,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::default(),
            interval,
            enabled: false,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(Duration::from_millis(config.auto_advance_interval_ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect on the next [`start`](Self::start).
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Whether presentation mode should start the timer.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stop();
        }
    }

    /// (Re)start ticking every `interval`.
    pub fn start(&self, on_tick: impl FnMut() + 'static) {
        tracing::debug!("Auto advance every {:?}", self.interval);
        self.timer.start(TimerMode::Repeated, self.interval, on_tick);
    }

    pub fn stop(&self) {
        if self.timer.running() {
            tracing::debug!("Auto advance stopped");
        }
        self.timer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.timer.running()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.timer.stop();
    }
}
