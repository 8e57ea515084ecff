use serde::{Deserialize, Serialize};

/// Raw cart-pole state `[x, x_dot, theta, theta_dot]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Cart position along the track (m).
    pub position: f32,
    /// Cart velocity (m/s).
    pub velocity: f32,
    /// Pole angle from vertical (rad), positive leaning right.
    pub angle: f32,
    /// Pole angular velocity (rad/s).
    pub angular_velocity: f32,
}

impl PhysicsState {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(position: f32, velocity: f32, angle: f32, angular_velocity: f32) -> Self {
        Self { position, velocity, angle, angular_velocity }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.angle.is_finite()
            && self.angular_velocity.is_finite()
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.position, self.velocity, self.angle, self.angular_velocity]
    }
}

impl From<[f32; 4]> for PhysicsState {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

/// The only control input: push the cart left or right with a fixed force.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of the force applied to the cart.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}
