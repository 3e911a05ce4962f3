//! The spinning wheel.
//!
//! [`Wheel`] owns at most one [`SpinSession`] and is stepped by an external
//! frame driver through [`Wheel::advance`]. It holds no timers: a driver that
//! stops calling `advance` has cancelled the spin.
//!
//! # Invariants
//!
//! 1. A session is only created with at least [`MIN_CANDIDATES`] candidates.
//! 2. `start_spin` while a session is running changes nothing.
//! 3. Each session emits `Started` once, then one `PinCrossed` per pin
//!    boundary the rotation passes, then `Settled` exactly once.
//! 4. Rotation is cumulative: a new spin starts where the last one rested.

mod events;
mod pins;
mod session;
mod target;
mod winner;

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use events::{
    AudioCues, Cue, CueSink, SelectionListener, SelectionNotifier, SpinEvent, SpinObserver,
};
pub use pins::{check_crossing, pin_index, Crossing};
pub use session::{ease_out_cubic, SpinSession, Step, DEFAULT_SPIN_DURATION};
pub use target::{generate_target, DEFAULT_MIN_ROTATION};
pub use winner::{resolve_winner, winning_index};

use crate::config::WheelConfig;
use crate::models::Entry;

/// Fewest candidates a spin can start with.
pub const MIN_CANDIDATES: usize = 2;

/// A spin request that was refused before any session was created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinRejected {
    #[error("a spin needs at least {MIN_CANDIDATES} candidates, got {count}")]
    NotEnoughCandidates { count: usize },
}

/// Outcome of an accepted spin request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinStart {
    Started { target: f64 },
    /// A spin was already running; nothing changed.
    Ignored,
}

/// Rotation after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub rotation: f64,
    pub done: bool,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Running(SpinSession),
    Settled,
}

#[derive(Debug, Clone)]
pub struct Wheel {
    phase: Phase,
    rotation: f64,
    winner: Option<Entry>,
    spin_duration: Duration,
    min_rotation: f64,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_DURATION, DEFAULT_MIN_ROTATION)
    }
}

impl Wheel {
    pub fn new(spin_duration: Duration, min_rotation: f64) -> Self {
        Self {
            phase: Phase::Idle,
            rotation: 0.0,
            winner: None,
            spin_duration,
            min_rotation,
        }
    }

    pub fn from_config(config: &WheelConfig) -> Self {
        Self::new(
            Duration::from_millis(config.spin_duration_ms),
            config.min_rotation,
        )
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }

    /// Rotation of the last frame, or the resting rotation between spins.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Winner of the last completed spin. Cleared when a new spin starts.
    pub fn winner(&self) -> Option<&Entry> {
        self.winner.as_ref()
    }

    /// Candidates of the running spin.
    pub fn candidates(&self) -> &[Entry] {
        match &self.phase {
            Phase::Running(session) => session.candidates(),
            _ => &[],
        }
    }

    /// Start a spin over `candidates` with a fresh random target.
    pub fn start_spin<R, O>(
        &mut self,
        candidates: Vec<Entry>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SpinStart, SpinRejected>
    where
        R: Rng + ?Sized,
        O: SpinObserver + ?Sized,
    {
        if self.is_spinning() {
            debug!("Spin already running, ignoring start");
            return Ok(SpinStart::Ignored);
        }
        check_candidates(&candidates)?;
        let target = generate_target(rng, self.min_rotation);
        self.start_spin_with_target(candidates, target, observer)
    }

    /// Start a spin with a caller-chosen total rotation.
    pub fn start_spin_with_target<O>(
        &mut self,
        candidates: Vec<Entry>,
        target: f64,
        observer: &mut O,
    ) -> Result<SpinStart, SpinRejected>
    where
        O: SpinObserver + ?Sized,
    {
        if self.is_spinning() {
            debug!("Spin already running, ignoring start");
            return Ok(SpinStart::Ignored);
        }
        check_candidates(&candidates)?;

        let count = candidates.len();
        let session = SpinSession::new(candidates, target, self.rotation, self.spin_duration);
        self.phase = Phase::Running(session);
        self.winner = None;

        debug!(candidates = count, target, base = self.rotation, "Spin started");
        observer.on_event(&SpinEvent::Started {
            candidates: count,
            target,
        });
        Ok(SpinStart::Started { target })
    }

    /// Step the running spin to the frame at `now` (milliseconds).
    ///
    /// Without a running spin this returns the resting rotation, marked done,
    /// and emits nothing.
    pub fn advance<O>(&mut self, now: f64, observer: &mut O) -> Frame
    where
        O: SpinObserver + ?Sized,
    {
        let session = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Running(session) => session,
            other => {
                self.phase = other;
                return Frame {
                    rotation: self.rotation,
                    done: true,
                };
            }
        };

        let (session, step) = session.step(now);
        self.rotation = step.rotation;

        for pin in step.passed_pins(session.candidates().len()) {
            observer.on_event(&SpinEvent::PinCrossed { pin });
        }

        if !step.settled {
            self.phase = Phase::Running(session);
            return Frame {
                rotation: step.rotation,
                done: false,
            };
        }

        self.rotation = step.rotation.rem_euclid(360.0);
        self.phase = Phase::Settled;

        let candidates = session.into_candidates();
        match winning_index(step.rotation, candidates.len()) {
            Some(index) => {
                let winner = candidates[index].clone();
                info!(id = winner.id, title = %winner.title, index, "Wheel settled");
                self.winner = Some(winner.clone());
                observer.on_event(&SpinEvent::Settled { index, winner });
            }
            None => warn!("Wheel settled without candidates"),
        }

        Frame {
            rotation: step.rotation,
            done: true,
        }
    }
}

fn check_candidates(candidates: &[Entry]) -> Result<(), SpinRejected> {
    if candidates.len() < MIN_CANDIDATES {
        debug!(count = candidates.len(), "Refusing spin");
        return Err(SpinRejected::NotEnoughCandidates {
            count: candidates.len(),
        });
    }
    Ok(())
}

/// Shuffle `entries` and keep at most `limit` of them.
pub fn cap_candidates<R: Rng + ?Sized>(entries: &[Entry], limit: usize, rng: &mut R) -> Vec<Entry> {
    let mut picked = entries.to_vec();
    picked.shuffle(rng);
    picked.truncate(limit);
    picked
}
