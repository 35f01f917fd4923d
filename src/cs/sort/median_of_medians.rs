//! # Median of Medians
//!
//! Deterministic selection with a linear worst case. The pivot is chosen as
//! the median of the medians of groups of [`GROUP_SIZE`] elements, which
//! guarantees that a constant fraction of the input is discarded on every
//! round regardless of the input order.

use super::partition::three_way_partition;
use crate::error::SelectionError;

/// Number of elements per group when computing the pivot.
pub const GROUP_SIZE: usize = 5;

/// Slices at or below this length are sorted directly instead of recursing.
pub const SMALL_INPUT_CUTOFF: usize = 10;

/// Returns the k-th smallest element (1-indexed) of `seq` using the median of
/// medians pivot rule. No randomness is involved.
///
/// The caller's slice is left untouched; the search runs on a private copy.
///
/// # Arguments
/// * `seq` - The elements to select from
/// * `k` - Rank into the sorted order, `1..=seq.len()`
///
/// # Returns
/// * `Ok(value)` - The k-th order statistic
/// * `Err(SelectionError::EmptyInput)` - If `seq` is empty
/// * `Err(SelectionError::OutOfRange { .. })` - If `k` is not a valid rank
///
/// # Examples
/// ```
/// use order_stats::sort::deterministic_select;
///
/// let arr: Vec<i32> = (0..11).rev().collect();
/// assert_eq!(deterministic_select(&arr, 6), Ok(5));
/// ```
///
/// # Complexity
/// * Time: O(n) worst case
/// * Space: O(n)
pub fn deterministic_select<T: Ord + Clone>(seq: &[T], k: usize) -> Result<T, SelectionError> {
    let target = SelectionError::check_rank(seq.len(), k)?;
    let mut work = seq.to_vec();
    Ok(select_in_place(&mut work, target))
}

/// Selects the element at 0-indexed sorted position `k`, reordering `arr`.
fn select_in_place<T: Ord + Clone>(arr: &mut [T], k: usize) -> T {
    if arr.len() <= SMALL_INPUT_CUTOFF {
        arr.sort_unstable();
        return arr[k].clone();
    }

    let pivot = median_of_medians(arr);
    let (lt, gt) = three_way_partition(arr, &pivot);
    if k < lt {
        select_in_place(&mut arr[..lt], k)
    } else if k < gt {
        pivot
    } else {
        select_in_place(&mut arr[gt..], k - gt)
    }
}

/// Median of the group medians. `arr` must be non-empty.
fn median_of_medians<T: Ord + Clone>(arr: &[T]) -> T {
    let mut medians: Vec<T> = arr
        .chunks(GROUP_SIZE)
        .map(|chunk| {
            let mut group = chunk.to_vec();
            group.sort_unstable();
            group[group.len() / 2].clone()
        })
        .collect();
    let middle = (medians.len() - 1) / 2;
    select_in_place(&mut medians, middle)
}
