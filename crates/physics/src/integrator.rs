//! # Physics Integration
//!
//! Cart-pole equations of motion and the fixed-step schemes used to advance
//! them. Everything here is a pure function of its inputs so a given state and
//! force always produce the same successor.

use serde::{Deserialize, Serialize};

use crate::cartpole::CartPoleConfig;
use crate::types::PhysicsState;

/// Fixed-step integration scheme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Positions advance with the velocities from the start of the step.
    #[default]
    Euler,
    /// Velocities advance first, positions then use the updated velocities.
    SemiImplicitEuler,
}

/// Linear and angular accelerations of the cart and pole.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Accelerations {
    pub x_acc: f32,
    pub theta_acc: f32,
}

/// Evaluate the frictionless cart-pole dynamics for a horizontal `force`
/// applied to the cart.
///
/// ```text
/// temp      = (F + m_p l theta_dot^2 sin(theta)) / (m_c + m_p)
/// theta_acc = (g sin(theta) - cos(theta) temp) / (l (4/3 - m_p cos^2(theta) / (m_c + m_p)))
/// x_acc     = temp - m_p l theta_acc cos(theta) / (m_c + m_p)
/// ```
#[must_use]
pub fn accelerations(config: &CartPoleConfig, state: &PhysicsState, force: f32) -> Accelerations {
    let total_mass = config.cart_mass + config.pole_mass;
    let pole_mass_length = config.pole_mass * config.pole_half_length;
    let (sin_theta, cos_theta) = state.angle.sin_cos();

    let temp = (force
        + pole_mass_length * state.angular_velocity * state.angular_velocity * sin_theta)
        / total_mass;
    let theta_acc = (config.gravity * sin_theta - cos_theta * temp)
        / (config.pole_half_length
            * (4.0 / 3.0 - config.pole_mass * cos_theta * cos_theta / total_mass));
    let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;

    Accelerations { x_acc, theta_acc }
}

/// Advance `state` by one timestep of length `tau` and return the successor.
#[must_use]
pub fn integrate(
    scheme: Integrator,
    state: &PhysicsState,
    acc: Accelerations,
    tau: f32,
) -> PhysicsState {
    match scheme {
        Integrator::Euler => PhysicsState {
            position: state.position + tau * state.velocity,
            velocity: state.velocity + tau * acc.x_acc,
            angle: state.angle + tau * state.angular_velocity,
            angular_velocity: state.angular_velocity + tau * acc.theta_acc,
        },
        Integrator::SemiImplicitEuler => {
            let velocity = state.velocity + tau * acc.x_acc;
            let angular_velocity = state.angular_velocity + tau * acc.theta_acc;
            PhysicsState {
                position: state.position + tau * velocity,
                velocity,
                angle: state.angle + tau * angular_velocity,
                angular_velocity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_pole_without_force_is_an_equilibrium() {
        let config = CartPoleConfig::default();
        let acc = accelerations(&config, &PhysicsState::ZERO, 0.0);
        assert_eq!(acc.x_acc, 0.0);
        assert_eq!(acc.theta_acc, 0.0);
    }

    #[test]
    fn pushing_right_tips_pole_left() {
        let config = CartPoleConfig::default();
        let acc = accelerations(&config, &PhysicsState::ZERO, config.force_magnitude);
        assert!(acc.x_acc > 0.0);
        assert!(acc.theta_acc < 0.0);
    }

    #[test]
    fn schemes_differ_only_in_position_update() {
        let state = PhysicsState::new(0.0, 1.0, 0.0, 0.5);
        let acc = Accelerations { x_acc: 2.0, theta_acc: -1.0 };
        let explicit = integrate(Integrator::Euler, &state, acc, 0.1);
        let semi = integrate(Integrator::SemiImplicitEuler, &state, acc, 0.1);

        assert_eq!(explicit.velocity, semi.velocity);
        assert_eq!(explicit.angular_velocity, semi.angular_velocity);
        assert!((explicit.position - 0.1).abs() < 1e-6);
        assert!((semi.position - 0.12).abs() < 1e-6);
        assert!((explicit.angle - 0.05).abs() < 1e-6);
        assert!((semi.angle - 0.04).abs() < 1e-6);
    }
}
