use sf_agent::ProfileError;
use sf_core::SfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] SfError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("environment has no destinations to cycle through")]
    NoDestinations,

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[cfg(feature = "parallel")]
    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
