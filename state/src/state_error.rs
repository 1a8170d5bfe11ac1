use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A reason why a player action was rejected.
pub enum StateError {
    #[error("Episode index {index} is out of range for a queue of {len}")]
    InvalidIndex { index: usize, len: usize },
}
