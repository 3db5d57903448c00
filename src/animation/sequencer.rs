//! Frame-stepped seed transition queue.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{CosmeticRng, EngineConfig, PitId};

/// The single seed currently in the air.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Pit the seed leaves (the previous destination, or the emptied pit).
    pub source: PitId,
    /// Pit the seed will land in.
    pub destination: PitId,
    /// Progress along the arc, `0.0..=1.0`.
    pub elapsed: f32,
    /// Cosmetic colour index for the renderer.
    pub tint: u8,
}

impl Transition {
    fn new(source: PitId, destination: PitId, tint: u8) -> Self {
        Self {
            source,
            destination,
            elapsed: 0.0,
            tint,
        }
    }
}

/// Outcome of one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerStep {
    /// Nothing is animating.
    Idle,
    /// A seed is in the air and has not landed yet.
    InFlight,
    /// A seed landed here and the next one took off.
    Landed(PitId),
    /// The last seed landed here; the queue is drained.
    Exhausted(PitId),
}

/// Sequential one-seed-at-a-time animation queue.
///
/// ## Behavior
///
/// - `start()`: pops the first target and begins its transition
/// - `step(dt)`: advances the active transition by `dt * move_speed`; at most
///   one seed lands per call and any overshoot past 1.0 is dropped
/// - Zero, negative or non-finite `dt` never moves anything
#[derive(Clone, Debug)]
pub struct AnimationSequencer {
    queue: VecDeque<PitId>,
    active: Option<Transition>,
    speed: f32,
    palette: u8,
    rng: CosmeticRng,
}

impl AnimationSequencer {
    /// Create an idle sequencer.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            active: None,
            speed: config.move_speed,
            palette: config.tint_count,
            rng: CosmeticRng::new(config.tint_seed),
        }
    }

    /// Begin animating `path`, with the first seed leaving `origin`.
    ///
    /// Returns false (and stays idle) for an empty path.
    pub fn start(&mut self, origin: PitId, path: &[PitId]) -> bool {
        self.queue.clear();
        self.queue.extend(path.iter().copied());

        self.active = match self.queue.pop_front() {
            Some(first) => Some(Transition::new(origin, first, self.rng.next_tint(self.palette))),
            None => None,
        };
        self.active.is_some()
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> SequencerStep {
        let Some(active) = self.active.as_mut() else {
            return SequencerStep::Idle;
        };
        if !dt.is_finite() || dt <= 0.0 {
            return SequencerStep::InFlight;
        }

        active.elapsed += dt * self.speed;
        if active.elapsed < 1.0 {
            return SequencerStep::InFlight;
        }

        let landed = active.destination;
        match self.queue.pop_front() {
            Some(next) => {
                *active = Transition::new(landed, next, self.rng.next_tint(self.palette));
                SequencerStep::Landed(landed)
            }
            None => {
                self.active = None;
                SequencerStep::Exhausted(landed)
            }
        }
    }

    /// The seed in the air, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// Seeds picked up but not yet landed.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.queue.len() + usize::from(self.active.is_some())
    }

    /// Drop any animation and rewind the tint stream.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.active = None;
        self.rng.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(id: u8) -> PitId {
        PitId::from_raw(id)
    }

    fn sequencer(speed: f32) -> AnimationSequencer {
        AnimationSequencer::new(&EngineConfig::default().with_move_speed(speed))
    }

    #[test]
    fn test_idle_until_started() {
        let mut seq = sequencer(5.0);
        assert!(seq.transition().is_none());
        assert_eq!(seq.step(1.0), SequencerStep::Idle);
        assert!(seq.transition().is_none());
    }

    #[test]
    fn test_start_pops_first_target() {
        let mut seq = sequencer(5.0);
        assert!(seq.start(pit(2), &[pit(3), pit(4), pit(5)]));

        let t = seq.transition().unwrap();
        assert_eq!(t.source, pit(2));
        assert_eq!(t.destination, pit(3));
        assert_eq!(t.elapsed, 0.0);
        assert_eq!(seq.in_flight(), 3);
    }

    #[test]
    fn test_empty_path_stays_idle() {
        let mut seq = sequencer(5.0);
        assert!(!seq.start(pit(0), &[]));
        assert_eq!(seq.step(1.0), SequencerStep::Idle);
    }

    #[test]
    fn test_zero_dt_never_advances() {
        let mut seq = sequencer(5.0);
        seq.start(pit(0), &[pit(1)]);

        for _ in 0..10 {
            assert_eq!(seq.step(0.0), SequencerStep::InFlight);
        }
        assert_eq!(seq.step(-1.0), SequencerStep::InFlight);
        assert_eq!(seq.step(f32::NAN), SequencerStep::InFlight);
        assert_eq!(seq.transition().unwrap().elapsed, 0.0);
    }

    #[test]
    fn test_one_landing_per_step() {
        let mut seq = sequencer(5.0);
        seq.start(pit(0), &[pit(1), pit(2), pit(3)]);

        // A huge dt still lands only one seed
        assert_eq!(seq.step(100.0), SequencerStep::Landed(pit(1)));
        let t = seq.transition().unwrap();
        assert_eq!(t.source, pit(1));
        assert_eq!(t.destination, pit(2));
        assert_eq!(t.elapsed, 0.0);

        assert_eq!(seq.step(100.0), SequencerStep::Landed(pit(2)));
        assert_eq!(seq.step(100.0), SequencerStep::Exhausted(pit(3)));
        assert!(seq.transition().is_none());
        assert_eq!(seq.in_flight(), 0);
    }

    #[test]
    fn test_progress_accumulates() {
        let mut seq = sequencer(2.0);
        seq.start(pit(7), &[pit(8)]);

        assert_eq!(seq.step(0.25), SequencerStep::InFlight);
        assert!((seq.transition().unwrap().elapsed - 0.5).abs() < 1e-6);
        assert_eq!(seq.step(0.25), SequencerStep::Exhausted(pit(8)));
    }

    #[test]
    fn test_tints_are_deterministic() {
        let path: Vec<_> = (1..=5).map(pit).collect();
        let mut a = sequencer(5.0);
        let mut b = sequencer(5.0);
        a.start(pit(0), &path);
        b.start(pit(0), &path);

        for _ in 0..path.len() {
            assert_eq!(a.transition().map(|t| t.tint), b.transition().map(|t| t.tint));
            a.step(1.0);
            b.step(1.0);
        }
    }

    #[test]
    fn test_reset_drops_animation() {
        let mut seq = sequencer(5.0);
        seq.start(pit(0), &[pit(1), pit(2)]);
        seq.reset();
        assert!(seq.transition().is_none());
        assert_eq!(seq.in_flight(), 0);
    }
}
