#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-pole Physics
//!
//! The physics layer of the cart-pole simulator: an inverted pendulum hinged
//! on a cart that rolls along a frictionless track.
//!
//! ## Key Components
//!
//! -   **State:** [`PhysicsState`] holds position, velocity, pole angle and
//!     angular velocity. [`Direction`] is the only control input.
//! -   **Model:** [`CartPole`] owns one state, resets it near equilibrium and
//!     advances it one fixed timestep per [`CartPole::step`].
//! -   **Integration:** the [`integrator`] module evaluates the classic
//!     Barto, Sutton & Anderson dynamics and applies an explicit or
//!     semi-implicit Euler step.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{CartPole, CartPoleConfig, Direction};
//!
//! let mut model = CartPole::with_seed(CartPoleConfig::default(), 7)?;
//! model.reset();
//! model.step(Direction::Right)?;
//! assert!(model.state().is_finite());
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod cartpole;
pub mod error;
pub mod integrator;
pub mod types;

pub use cartpole::{CartPole, CartPoleConfig};
pub use error::PhysicsError;
pub use integrator::Integrator;
pub use types::{Direction, PhysicsState};
