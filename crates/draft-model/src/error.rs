use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("unknown archetype code: {0}")]
    UnknownArchetype(String),
    #[error("unknown column policy: {0}")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
