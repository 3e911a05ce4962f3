use std::time::Duration;

use super::pins::{check_crossing, pin_index};
use crate::models::Entry;

/// Length of one spin.
pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_secs(10);

/// Cubic ease-out: fast start, slow settle.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// State of one spin, advanced by value once per frame.
#[derive(Debug, Clone)]
pub struct SpinSession {
    candidates: Vec<Entry>,
    total_rotation: f64,
    base_rotation: f64,
    duration_ms: f64,
    start: Option<f64>,
    last_crossed: f64,
}

/// What one frame produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub rotation: f64,
    pub progress: f64,
    /// Pin under the indicator when a pin boundary was passed this frame.
    pub crossed_pin: Option<usize>,
    /// Pin boundaries passed this frame.
    pub crossings: usize,
    pub settled: bool,
}

impl Step {
    /// Every pin entered this frame, oldest first, on a wheel of `count` pins.
    pub fn passed_pins(&self, count: usize) -> impl Iterator<Item = usize> {
        let last = self.crossed_pin;
        let crossings = self.crossings;
        (0..crossings).filter_map(move |k| {
            let last = last?;
            let back = (crossings - 1 - k) % count;
            Some((last + count - back) % count)
        })
    }
}

impl SpinSession {
    /// `base_rotation` is where the previous spin came to rest; the new spin
    /// continues forward from there.
    pub fn new(
        candidates: Vec<Entry>,
        total_rotation: f64,
        base_rotation: f64,
        duration: Duration,
    ) -> Self {
        let base_rotation = base_rotation.rem_euclid(360.0);
        Self {
            candidates,
            total_rotation,
            base_rotation,
            duration_ms: duration.as_secs_f64() * 1000.0,
            start: None,
            last_crossed: base_rotation,
        }
    }

    pub fn candidates(&self) -> &[Entry] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Entry> {
        self.candidates
    }

    pub fn total_rotation(&self) -> f64 {
        self.total_rotation
    }

    pub fn base_rotation(&self) -> f64 {
        self.base_rotation
    }

    /// Timestamp of the first frame, once one has been seen.
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// Fraction of the spin elapsed at `now`, clamped to `[0, 1]`.
    fn progress(&self, start: f64, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Advance to the frame at `now` (milliseconds, monotonic).
    ///
    /// The first call records the start timestamp.
    pub fn step(mut self, now: f64) -> (Self, Step) {
        let start = *self.start.get_or_insert(now);
        let progress = self.progress(start, now);
        let rotation = self.base_rotation + ease_out_cubic(progress) * self.total_rotation;

        let count = self.candidates.len();
        let crossing = check_crossing(rotation, count, self.last_crossed);
        let crossed_pin = if crossing.crossed {
            self.last_crossed = crossing.last_crossed;
            pin_index(rotation, count)
        } else {
            None
        };

        let step = Step {
            rotation,
            progress,
            crossed_pin,
            crossings: crossing.passed,
            settled: progress >= 1.0,
        };
        (self, step)
    }
}
