use thiserror::Error;

use crate::types::PhysicsState;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Integration produced NaN or infinity. The previous state is kept.
    #[error("integration produced a non-finite state: {state:?}")]
    NonFinite { state: PhysicsState },
    #[error("invalid cart-pole configuration: {0}")]
    InvalidConfig(&'static str),
}
