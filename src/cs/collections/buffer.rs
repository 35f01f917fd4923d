//! Fixed-size slot storage shared by the growable containers.
//!
//! A buffer is allocated once at a given capacity and never changes length;
//! growing a container means allocating a larger buffer and moving the live
//! slots across.

/// Smallest capacity a buffer grows to from zero.
pub(crate) const MIN_CAPACITY: usize = 1;

pub(crate) type Slots<T> = Box<[Option<T>]>;

/// Allocates `capacity` empty slots.
pub(crate) fn allocate<T>(capacity: usize) -> Slots<T> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Doubling growth policy: `max(2 * capacity, 1)`.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(MIN_CAPACITY)
}

/// Moves the occupied slots yielded by `live`, in order, into a fresh buffer
/// of `new_capacity` slots starting at index 0.
pub(crate) fn relocate<'a, T: 'a>(
    live: impl Iterator<Item = &'a mut Option<T>>,
    new_capacity: usize,
) -> Slots<T> {
    let mut fresh = allocate(new_capacity);
    for (dst, src) in fresh.iter_mut().zip(live) {
        *dst = src.take();
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_policy() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 2);
        assert_eq!(grown_capacity(16), 32);
        assert_eq!(grown_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_relocate_preserves_order() {
        let mut old: Slots<char> = vec![Some('a'), Some('b'), None].into_boxed_slice();
        let fresh = relocate(old[..2].iter_mut(), 6);
        assert_eq!(fresh.len(), 6);
        assert_eq!(&fresh[..3], &[Some('a'), Some('b'), None]);
        assert!(old.iter().all(Option::is_none));
    }
}
