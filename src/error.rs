//! Error types shared by the selection engine and the containers.

use thiserror::Error;

/// Failures of the order-statistic selection routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The input sequence had no elements.
    #[error("cannot select from an empty sequence")]
    EmptyInput,

    /// The requested rank is outside `1..=len`.
    #[error("rank {k} is out of range for a sequence of length {len}")]
    OutOfRange { k: usize, len: usize },
}

impl SelectionError {
    /// Validates a 1-indexed rank against `len` and returns the 0-indexed position.
    pub(crate) fn check_rank(len: usize, k: usize) -> std::result::Result<usize, Self> {
        if len == 0 {
            return Err(SelectionError::EmptyInput);
        }
        if k == 0 || k > len {
            return Err(SelectionError::OutOfRange { k, len });
        }
        Ok(k - 1)
    }
}

/// Failures of the dynamic array, stack and queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// An index fell outside the valid range for the operation.
    #[error("index {index} is out of bounds for length {len}")]
    IndexError { index: usize, len: usize },

    /// A removal or peek was attempted on an empty container.
    #[error("{0}")]
    Underflow(&'static str),
}

/// Crate-wide error, convertible from either component's error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Container(#[from] ContainerError),

    /// An algorithm name that is neither `deterministic` nor `randomized`.
    #[error("unknown selection algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
