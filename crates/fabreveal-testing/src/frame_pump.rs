//! Deterministic frame driver for tests.
//!
//! Owns a [`Runtime`] and advances a virtual frame clock by a fixed interval,
//! so animations run to completion without any real time passing.

use fabreveal_core::{FrameClock, Runtime, NANOS_PER_MILLI};

/// One frame at 60 Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Frames [`FramePump::run_until_idle`] runs before giving up.
pub const DEFAULT_MAX_FRAMES: usize = 1_000;

pub struct FramePump {
    runtime: Runtime,
    frame_time_nanos: u64,
    interval_nanos: u64,
    frames_run: usize,
}

impl FramePump {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL_NANOS)
    }

    pub fn with_interval(interval_nanos: u64) -> Self {
        assert!(interval_nanos > 0, "frame interval must be positive");
        Self {
            runtime: Runtime::default(),
            frame_time_nanos: 0,
            interval_nanos,
            frames_run: 0,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    /// Time the next frame will be drained at.
    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run
    }

    pub fn is_idle(&self) -> bool {
        !self.runtime.has_frame_callbacks()
    }

    /// Drains one frame and moves the clock forward, whether or not anything
    /// was queued.
    pub fn advance_frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos += self.interval_nanos;
        self.frames_run += 1;
    }

    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    /// Runs frames until at least `millis` of virtual time has passed.
    pub fn advance_by_millis(&mut self, millis: u64) {
        let target = self.frame_time_nanos + millis * NANOS_PER_MILLI;
        while self.frame_time_nanos < target {
            self.advance_frame();
        }
    }

    /// Runs frames until no callback is queued and returns how many ran.
    ///
    /// # Panics
    ///
    /// Panics if the runtime is still busy after [`DEFAULT_MAX_FRAMES`].
    pub fn run_until_idle(&mut self) -> usize {
        self.run_until_idle_within(DEFAULT_MAX_FRAMES)
    }

    pub fn run_until_idle_within(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while !self.is_idle() {
            assert!(
                frames < max_frames,
                "runtime still busy after {max_frames} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        log::trace!("idle after {frames} frames");
        frames
    }
}

impl Default for FramePump {
    fn default() -> Self {
        Self::new()
    }
}
