//! State, action, terminal and reward transforms between the physics model
//! and the records exchanged with the training platform.

use physics::{Direction, PhysicsState};
use serde::{Deserialize, Serialize};

/// Cart travel limit in meters. Positions strictly beyond it end the episode.
pub const X_THRESHOLD: f32 = 2.4;
/// Pole angle limit, 12 degrees in radians (~0.2094).
pub const THETA_THRESHOLD_RADIANS: f32 = 12.0 * 2.0 * std::f32::consts::PI / 360.0;

/// Reward for every step that does not end the episode.
pub const ALIVE_REWARD: f32 = 1.0;
/// Reward for the step that ends the episode.
pub const TERMINAL_REWARD: f32 = -0.01;

/// State record sent to the platform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrainState {
    pub position: f32,
    pub velocity: f32,
    pub angle: f32,
    /// Pole angular velocity.
    pub rotation: f32,
}

/// Action record received from the platform. Only the sign of `command`
/// carries meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrainAction {
    pub command: f32,
}

impl BrainAction {
    #[must_use]
    pub const fn new(command: f32) -> Self {
        Self { command }
    }
}

#[must_use]
pub fn encode_state(state: &PhysicsState) -> BrainState {
    BrainState {
        position: state.position,
        velocity: state.velocity,
        angle: state.angle,
        rotation: state.angular_velocity,
    }
}

/// Positive commands push right, everything else (zero and NaN included)
/// pushes left.
#[must_use]
pub fn decode_action(action: &BrainAction) -> Direction {
    if action.command > 0.0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// True once the cart leaves the track or the pole tips past the angle limit.
/// Values exactly on a limit are still in bounds.
#[must_use]
pub fn is_terminal(state: &PhysicsState) -> bool {
    state.position < -X_THRESHOLD
        || state.position > X_THRESHOLD
        || state.angle < -THETA_THRESHOLD_RADIANS
        || state.angle > THETA_THRESHOLD_RADIANS
}

#[must_use]
pub fn reward(_state: &PhysicsState, terminal: bool) -> f32 {
    if terminal {
        TERMINAL_REWARD
    } else {
        ALIVE_REWARD
    }
}
