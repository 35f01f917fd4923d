//! Order-statistic selection (median of medians and randomized quickselect)
//! together with a hand-grown dynamic array, stack and queue.

pub mod cs;
pub mod error;

pub use cs::{collections, sort};
pub use error::{ContainerError, Error, Result, SelectionError};
