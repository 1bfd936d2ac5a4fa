//! Key-extraction orderings.
//!
//! An ordering maps each element to a [`PartialOrd`] key and compares keys.
//! [`HVec`]'s relational operators delegate to [`ByMagnitude`]; the sort in
//! [`crate::sort`] accepts any [`KeyOrdering`], so alternate orderings do not
//! require touching the vector type.

use std::cmp::{Ordering, Reverse};

use crate::core::vector::HVec;

/// Orders elements of type `T` by a derived key.
///
/// Elements whose keys compare equal are equivalent under the ordering even
/// when the elements themselves differ, so the result is a weak order.
///
/// # Examples
/// ```
/// use hvec::{ByMagnitude, HVec, KeyOrdering};
/// let short = HVec::new([0.0, 1.0]);
/// let long = HVec::new([2.0, 0.0]);
/// assert!(ByMagnitude.is_less(&short, &long));
/// assert_eq!(ByMagnitude.key(&long), 2.0);
/// ```
pub trait KeyOrdering<T: ?Sized> {
    /// Key compared in place of the element.
    type Key: PartialOrd;

    /// Extracts the comparison key.
    fn key(&self, item: &T) -> Self::Key;

    /// Strict less-than on keys.
    fn is_less(&self, a: &T, b: &T) -> bool {
        self.key(a) < self.key(b)
    }

    /// Three-way comparison on keys, `None` when the keys are unordered.
    fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        self.key(a).partial_cmp(&self.key(b))
    }
}

/// Orders vectors by Euclidean length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByMagnitude;

impl<const N: usize> KeyOrdering<HVec<N>> for ByMagnitude {
    type Key = f32;

    fn key(&self, item: &HVec<N>) -> f32 {
        item.magnitude()
    }
}

/// Orders vectors by a single component.
///
/// The wrapped index must be smaller than the dimension of every vector it is
/// applied to; [`HVec::component`] panics otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByComponent(pub usize);

impl<const N: usize> KeyOrdering<HVec<N>> for ByComponent {
    type Key = f32;

    fn key(&self, item: &HVec<N>) -> f32 {
        item.component(self.0)
    }
}

/// Reverses another ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending<O>(pub O);

impl<T: ?Sized, O: KeyOrdering<T>> KeyOrdering<T> for Descending<O> {
    type Key = Reverse<O::Key>;

    fn key(&self, item: &T) -> Self::Key {
        Reverse(self.0.key(item))
    }
}
