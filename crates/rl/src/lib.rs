#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-pole RL Glue
//!
//! Connects the [`physics`] cart-pole model to a training platform's
//! simulator protocol.
//!
//! -   [`transform`] converts between the raw physics state and the platform's
//!     state/action records and defines terminal and reward.
//! -   [`Simulator`] is the interface the platform's run loop drives;
//!     [`CartpoleSimulator`] implements it and enforces the iteration cap.
//! -   [`policy`] and [`runner`] let episodes run locally without a platform.

pub mod env;
pub mod error;
pub mod policy;
pub mod runner;
pub mod simulator;
pub mod transform;

pub use env::{EpisodeEnd, Simulator, StepOutcome};
pub use error::SimError;
pub use policy::{AlternatePolicy, BalancePolicy, Policy, RandomPolicy};
pub use runner::{run_episode, run_episode_with, EpisodeSummary};
pub use simulator::{CartpoleSimulator, SimulatorConfig, DEFAULT_MAX_ITERATIONS};
pub use transform::{
    decode_action, encode_state, is_terminal, reward, BrainAction, BrainState,
};
