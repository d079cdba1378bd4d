//! Tick timing.
//!
//! The simulation itself is scheduler-free: the host calls `tick()` from a
//! frame callback, a fixed-timestep loop or a test harness. The clock just
//! keeps the bookkeeping that goes with that - tick count, wall-clock
//! elapsed/delta and a periodically refreshed ticks-per-second figure -
//! with a fixed-delta mode for deterministic runs.

use std::time::{Duration, Instant};

/// How often the ticks-per-second estimate refreshes.
const RATE_WINDOW: Duration = Duration::from_millis(500);

/// Tick counter and timing stats for one simulation instance.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    ticks: u64,
    delta_secs: f32,
    /// When set, `delta()` reports this instead of wall-clock time.
    fixed_delta: Option<f32>,
    rate: f32,
    rate_ticks: u64,
    rate_updated: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            ticks: 0,
            delta_secs: 0.0,
            fixed_delta: None,
            rate: 0.0,
            rate_ticks: 0,
            rate_updated: now,
        }
    }

    /// Use a fixed per-tick delta instead of wall-clock measurement.
    pub fn with_fixed_delta(mut self, delta: f32) -> Self {
        self.fixed_delta = Some(delta);
        self
    }

    /// Record one tick. Call once per simulation step.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let raw = now.duration_since(self.last_tick).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw);
        self.last_tick = now;
        self.ticks += 1;

        let window = now.duration_since(self.rate_updated);
        if window >= RATE_WINDOW {
            self.rate = (self.ticks - self.rate_ticks) as f32 / window.as_secs_f32();
            self.rate_ticks = self.ticks;
            self.rate_updated = now;
        }
    }

    /// Ticks recorded so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seconds since the last tick (or the fixed delta).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Wall-clock seconds since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Smoothed ticks-per-second estimate. Zero until the first window
    /// completes.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
