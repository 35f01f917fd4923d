use std::cmp::Ordering;

/// Dutch-national-flag partition of `arr` around `pivot`.
///
/// Returns `(lt, gt)` such that `arr[..lt] < pivot`, `arr[lt..gt] == pivot`
/// and `arr[gt..] > pivot`. Keeping the equal band separate means duplicate
/// pivot values are excluded together, so rank arithmetic stays exact.
pub(crate) fn three_way_partition<T: Ord>(arr: &mut [T], pivot: &T) -> (usize, usize) {
    let mut lt = 0;
    let mut i = 0;
    let mut gt = arr.len();
    while i < gt {
        match arr[i].cmp(pivot) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
