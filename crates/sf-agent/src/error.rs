use thiserror::Error;

use sf_core::{AgentId, ProfileId};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile {name:?} is invalid: {reason}")]
    Invalid { name: String, reason: String },

    #[error("a profile named {0:?} is already registered")]
    DuplicateName(String),

    #[error("profile {0} is not registered")]
    UnknownProfile(ProfileId),

    #[error("no profile named {0:?}")]
    UnknownName(String),

    #[error("profile table is full ({0} entries)")]
    TableFull(usize),

    #[error("agent #{agent} has invalid radius {radius}")]
    InvalidRadius { agent: usize, radius: f32 },

    #[error("agent {0} does not exist")]
    UnknownAgent(AgentId),

    #[error("profile parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
