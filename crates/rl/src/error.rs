use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("simulate called before episode_start")]
    NotStarted,
    #[error("episode {episode} already ended at iteration {iteration}; call episode_start")]
    EpisodeFinished { episode: u64, iteration: u32 },
    #[error("invalid simulator configuration: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
