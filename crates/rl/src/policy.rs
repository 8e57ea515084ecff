//! Stand-in controllers that produce platform actions when no training
//! platform is attached.

use crate::transform::{BrainAction, BrainState};

/// Maps a state record to an action record.
pub trait Policy {
    fn act(&mut self, state: &BrainState) -> BrainAction;
}

impl<F> Policy for F
where
    F: FnMut(&BrainState) -> BrainAction,
{
    fn act(&mut self, state: &BrainState) -> BrainAction {
        self(state)
    }
}

/// Uniformly random commands in `[-1, 1)`.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _state: &BrainState) -> BrainAction {
        BrainAction::new(self.rng.f32() * 2.0 - 1.0)
    }
}

/// Flips the push direction every step, starting to the right.
#[derive(Debug, Clone, Default)]
pub struct AlternatePolicy {
    step: u64,
}

impl Policy for AlternatePolicy {
    fn act(&mut self, _state: &BrainState) -> BrainAction {
        let command = if self.step % 2 == 0 { 1.0 } else { -1.0 };
        self.step += 1;
        BrainAction::new(command)
    }
}

/// Pushes the cart under the pole: the command is `angle + damping * rotation`,
/// so a pole falling right moves the cart right.
#[derive(Debug, Clone, Copy)]
pub struct BalancePolicy {
    pub damping: f32,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self { damping: 0.5 }
    }
}

impl Policy for BalancePolicy {
    fn act(&mut self, state: &BrainState) -> BrainAction {
        BrainAction::new(state.angle + self.damping * state.rotation)
    }
}
