use rand::Rng;

use super::partition::three_way_partition;
use crate::error::SelectionError;

/// Returns the k-th smallest element (1-indexed) of `seq` using quickselect
/// with a uniformly random pivot drawn from the thread-local generator.
///
/// The caller's slice is left untouched; the search runs on a private copy.
///
/// # Examples
/// ```
/// use order_stats::sort::randomized_quickselect;
///
/// let arr = [7, 1, 3, 4, 6, 2, 5];
/// assert_eq!(randomized_quickselect(&arr, 4), Ok(4));
/// ```
///
/// # Complexity
/// * Time: expected O(n), worst case O(n^2)
/// * Space: O(n) for the working copy
pub fn randomized_quickselect<T: Ord + Clone>(seq: &[T], k: usize) -> Result<T, SelectionError> {
    randomized_quickselect_with_rng(seq, k, &mut rand::thread_rng())
}

/// Same as [`randomized_quickselect`] but draws pivots from `rng`, so a seeded
/// generator makes the pivot sequence reproducible.
pub fn randomized_quickselect_with_rng<T, R>(
    seq: &[T],
    k: usize,
    rng: &mut R,
) -> Result<T, SelectionError>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let target = SelectionError::check_rank(seq.len(), k)?;
    let mut work = seq.to_vec();
    Ok(quickselect(&mut work, target, rng))
}

/// Selects the element at 0-indexed sorted position `k`, reordering `arr`.
///
/// `arr` must be non-empty and `k < arr.len()`.
pub(crate) fn quickselect<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> T
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if arr.len() == 1 {
        return arr[0].clone();
    }
    let pivot_index = rng.gen_range(0..arr.len());
    let pivot = arr[pivot_index].clone();
    let (lt, gt) = three_way_partition(arr, &pivot);
    if k < lt {
        quickselect(&mut arr[..lt], k, rng)
    } else if k < gt {
        pivot
    } else {
        quickselect(&mut arr[gt..], k - gt, rng)
    }
}
