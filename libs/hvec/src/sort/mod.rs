//! Gap-sequence insertion sort (shell sort).
//!
//! Sorts any mutable slice in place using only a strict less-than relation.
//! Each gap from [`SHELL_SORT_GAPS`] that fits the slice drives one insertion
//! pass with that stride; the final gap of one leaves the slice sorted.
//!
//! The sort is **not stable**: elements that compare equal may be reordered.
//! It allocates nothing and moves elements only through swaps.
//!
//! # Examples
//! ```
//! use hvec::{shell_sort, HVec};
//!
//! let mut vecs = [
//!     HVec::new([0.6, 0.3, 0.3]),
//!     HVec::new([0.1, 0.2, 0.3]),
//!     HVec::new([-0.1, -0.2, 0.0]),
//! ];
//! shell_sort(&mut vecs);
//! assert!(vecs.windows(2).all(|w| !(w[1] < w[0])));
//! ```

use config::constants::SHELL_SORT_GAPS;

use crate::core::ordering::KeyOrdering;

/// Sorts `items` ascending by `<`.
pub fn shell_sort<T: PartialOrd>(items: &mut [T]) {
    shell_sort_by(items, |a, b| a < b);
}

/// Sorts `items` so that no element is `is_less` than the one before it.
///
/// `is_less(a, b)` must be a strict weak ordering for the result to be
/// meaningful; it is never called with an element and itself.
///
/// # Examples
/// ```
/// use hvec::shell_sort_by;
/// let mut values = [3, 1, 2];
/// shell_sort_by(&mut values, |a, b| a > b);
/// assert_eq!(values, [3, 2, 1]);
/// ```
pub fn shell_sort_by<T, F>(items: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    for &gap in SHELL_SORT_GAPS.iter().filter(|&&gap| gap <= len) {
        tracing::trace!(gap, len, "shell sort pass");
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&items[j], &items[j - gap]) {
                items.swap(j, j - gap);
                j -= gap;
            }
        }
    }
}

/// Sorts `items` ascending by the key `ordering` extracts.
///
/// # Examples
/// ```
/// use hvec::{shell_sort_by_key, ByComponent, HVec};
/// let mut vecs = [HVec::new([2.0, 0.0]), HVec::new([-1.0, 9.0])];
/// shell_sort_by_key(&mut vecs, &ByComponent(0));
/// assert_eq!(vecs[0].component(0), -1.0);
/// ```
pub fn shell_sort_by_key<T, O>(items: &mut [T], ordering: &O)
where
    O: KeyOrdering<T>,
{
    shell_sort_by(items, |a, b| ordering.is_less(a, b));
}
