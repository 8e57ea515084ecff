//! CartPole model for reinforcement learning environments
//!
//! This module owns the cart-pole state and advances it one fixed timestep at
//! a time. It knows nothing about rewards or episode bookkeeping; those belong
//! to whoever drives it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::PhysicsError;
use crate::integrator::{accelerations, integrate, Integrator};
use crate::types::{Direction, PhysicsState};

/// Configuration for a CartPole model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartPoleConfig {
    /// Gravitational acceleration in m/s^2
    pub gravity: f32,
    /// Cart mass in kg
    pub cart_mass: f32,
    /// Pole mass in kg
    pub pole_mass: f32,
    /// Half the pole length in meters
    pub pole_half_length: f32,
    /// Force magnitude applied to the cart on every step
    pub force_magnitude: f32,
    /// Integration timestep in seconds
    pub tau: f32,
    /// Reset draws each state component from `[-reset_noise, reset_noise)`
    pub reset_noise: f32,
    pub integrator: Integrator,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            pole_half_length: 0.5,
            force_magnitude: 10.0,
            tau: 0.02,
            reset_noise: 0.05,
            integrator: Integrator::Euler,
        }
    }
}

impl CartPoleConfig {
    /// Check that the constants describe a physically meaningful system.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.cart_mass) {
            return Err(PhysicsError::InvalidConfig("cart_mass must be positive"));
        }
        if !positive(self.pole_mass) {
            return Err(PhysicsError::InvalidConfig("pole_mass must be positive"));
        }
        if !positive(self.pole_half_length) {
            return Err(PhysicsError::InvalidConfig("pole_half_length must be positive"));
        }
        if !positive(self.tau) {
            return Err(PhysicsError::InvalidConfig("tau must be positive"));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite"));
        }
        if !non_negative(self.force_magnitude) {
            return Err(PhysicsError::InvalidConfig("force_magnitude must be non-negative"));
        }
        if !non_negative(self.reset_noise) {
            return Err(PhysicsError::InvalidConfig("reset_noise must be non-negative"));
        }
        Ok(())
    }
}

/// A single cart on a frictionless track with a pole hinged on top.
#[derive(Debug, Clone)]
pub struct CartPole {
    config: CartPoleConfig,
    state: PhysicsState,
    rng: fastrand::Rng,
}

impl CartPole {
    /// Create a model whose resets are seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: CartPoleConfig) -> Result<Self, PhysicsError> {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Create a model with reproducible resets.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if `config` fails validation.
    pub fn with_seed(config: CartPoleConfig, seed: u64) -> Result<Self, PhysicsError> {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: CartPoleConfig, rng: fastrand::Rng) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self { config, state: PhysicsState::ZERO, rng })
    }

    /// Constants the model was validated with.
    #[must_use]
    pub fn config(&self) -> &CartPoleConfig {
        &self.config
    }

    /// Current state vector.
    #[must_use]
    pub fn state(&self) -> PhysicsState {
        self.state
    }

    /// Place the model in an arbitrary state.
    pub fn set_state(&mut self, state: PhysicsState) {
        self.state = state;
    }

    /// Reset the cartpole near its upright equilibrium.
    pub fn reset(&mut self) {
        let noise = self.config.reset_noise;
        let mut sample = || (self.rng.f32() * 2.0 - 1.0) * noise;
        self.state = PhysicsState {
            position: sample(),
            velocity: sample(),
            angle: sample(),
            angular_velocity: sample(),
        };
        trace!(state = ?self.state, "cartpole reset");
    }

    /// Push the cart in `direction` and integrate one timestep.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::NonFinite`] if the step would leave the state
    /// containing NaN or infinity; the state is not modified in that case.
    pub fn step(&mut self, direction: Direction) -> Result<(), PhysicsError> {
        let force = direction.sign() * self.config.force_magnitude;
        let acc = accelerations(&self.config, &self.state, force);
        let next = integrate(self.config.integrator, &self.state, acc, self.config.tau);

        if !next.is_finite() {
            return Err(PhysicsError::NonFinite { state: next });
        }
        self.state = next;
        Ok(())
    }
}
