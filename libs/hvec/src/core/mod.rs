//! Core value types and the operations defined on them.
//!
//! Includes the fixed-dimension vector (`HVec`), its orderings, products and
//! `glam` conversions.

pub mod interop;
pub mod ordering;
pub mod products;
pub mod vector;
