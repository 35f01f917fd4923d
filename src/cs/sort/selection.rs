//! # Order-statistic selection
//!
//! A single entry point over the two selection algorithms in this crate.
//! Ranks are **1-indexed**: `k = 1` is the minimum and `k = len` the maximum.
//! Every call copies its input, so the caller's slice is never reordered.
//!
//! ## Example
//! ```rust
//! use order_stats::sort::{select, Algorithm, Selector};
//!
//! let data = [9, 2, 7, 4, 5];
//! assert_eq!(select(&data, 2, Algorithm::Deterministic), Ok(4));
//!
//! let mut selector = Selector::seeded(Algorithm::Randomized, 7);
//! assert_eq!(selector.select(&data, 5), Ok(9));
//! ```

use std::fmt;
use std::str::FromStr;

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::median_of_medians::deterministic_select;
use super::randomized_quickselect::randomized_quickselect_with_rng;
use crate::error::{Error, SelectionError};

/// Which selection algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Median of medians: worst-case linear, no randomness.
    Deterministic,
    /// Quickselect with a uniformly random pivot: expected linear.
    Randomized,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Deterministic => "deterministic",
            Algorithm::Randomized => "randomized",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deterministic" => Ok(Algorithm::Deterministic),
            "randomized" => Ok(Algorithm::Randomized),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Returns the k-th smallest element of `seq` using `algorithm`.
///
/// The randomized variant draws pivots from the thread-local generator; use a
/// [`Selector`] to inject a seeded one.
pub fn select<T: Ord + Clone>(
    seq: &[T],
    k: usize,
    algorithm: Algorithm,
) -> Result<T, SelectionError> {
    Selector::new(algorithm).select(seq, k)
}

/// Returns the lower median of `seq`, i.e. the element of rank `(len + 1) / 2`.
pub fn median<T: Ord + Clone>(seq: &[T], algorithm: Algorithm) -> Result<T, SelectionError> {
    select(seq, (seq.len() + 1) / 2, algorithm)
}

/// An algorithm choice bundled with the random source the randomized variant
/// draws pivots from. The deterministic variant never touches the generator.
#[derive(Debug, Clone)]
pub struct Selector<R = ThreadRng> {
    algorithm: Algorithm,
    rng: R,
}

impl Selector<ThreadRng> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_rng(algorithm, rand::thread_rng())
    }
}

impl Selector<ChaCha8Rng> {
    /// A selector whose pivot sequence is fully determined by `seed`.
    pub fn seeded(algorithm: Algorithm, seed: u64) -> Self {
        Self::with_rng(algorithm, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Selector<R> {
    pub fn with_rng(algorithm: Algorithm, rng: R) -> Self {
        Selector { algorithm, rng }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the k-th smallest element (1-indexed) of `seq`.
    ///
    /// # Returns
    /// * `Ok(value)` - `sorted(seq)[k - 1]`
    /// * `Err(SelectionError::EmptyInput)` - If `seq` is empty, for any `k`
    /// * `Err(SelectionError::OutOfRange { .. })` - If `k == 0` or `k > seq.len()`
    pub fn select<T: Ord + Clone>(&mut self, seq: &[T], k: usize) -> Result<T, SelectionError> {
        log::debug!(
            "{} select: len={}, k={}",
            self.algorithm,
            seq.len(),
            k
        );
        match self.algorithm {
            Algorithm::Deterministic => deterministic_select(seq, k),
            Algorithm::Randomized => randomized_quickselect_with_rng(seq, k, &mut self.rng),
        }
    }
}
