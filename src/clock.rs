//! Fixed-rate tick driver
//!
//! Wall-clock frame time goes in, a whole number of simulation ticks comes
//! out. Leftover time carries over to the next frame.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedClock {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Account for `elapsed` seconds and return how many ticks are due
    ///
    /// Long frames (tab in background, debugger) are clamped, and at most
    /// `MAX_SUBSTEPS` ticks run per frame; anything beyond that is dropped
    /// rather than queued.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_substeps {
            self.accumulator -= self.dt;
            ticks += 1;
        }

        if self.accumulator >= self.dt {
            log::warn!(
                "Simulation falling behind, dropping {:.3}s",
                self.accumulator - self.accumulator % self.dt
            );
            self.accumulator %= self.dt;
        }

        ticks
    }

    /// Fraction of a tick waiting in the accumulator (for interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
