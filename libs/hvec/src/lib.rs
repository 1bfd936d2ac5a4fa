//! Fixed-dimension float vectors and a gap-sequence shell sort.
//!
//! [`HVec<N>`](HVec) is an `N`-component `f32` vector with value-semantics
//! algebra, magnitude-based comparison and an exact text rendering.
//! [`shell_sort`] sorts any mutable slice in place, which for vectors means
//! shortest first.
//!
//! ```
//! use hvec::{shell_sort, Cross, HVec};
//!
//! let a = HVec::new([1.0, 0.0, 0.0]);
//! let b = HVec::new([0.0, 1.0, 0.0]);
//! assert_eq!(a.dot(&b), 0.0);
//! assert!(a.cross(&b).approx_eq(&HVec::new([0.0, 0.0, 1.0])));
//!
//! let mut vecs = [a.scale(3.0), b, a.sum(&b)];
//! shell_sort(&mut vecs);
//! assert_eq!(vecs[0].describe(), "HVec<3>{0.000000 1.000000 0.000000}");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod sort;

pub use crate::core::ordering::{ByComponent, ByMagnitude, Descending, KeyOrdering};
pub use crate::core::products::{cross, cross2, cross3, dot, Cross};
pub use crate::core::vector::HVec;
pub use error::{VectorError, VectorResult};
pub use sort::{shell_sort, shell_sort_by, shell_sort_by_key};
