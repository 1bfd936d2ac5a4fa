//! # Config Crate
//!
//! Centralized configuration constants for the hvec workspace.
//! Tolerances, rendering precision and the sort gap sequence are defined
//! here so every crate agrees on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EQUALS_DELTA, SHELL_SORT_GAPS};
//!
//! // Componentwise tolerance used by approximate vector equality
//! let diff: f32 = 0.00005;
//! assert!(diff.abs() < EQUALS_DELTA);
//!
//! // The gap sequence always finishes with a plain insertion pass
//! assert_eq!(SHELL_SORT_GAPS.last(), Some(&1));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values and a small validated snapshot
//! - **Golden-Output Stable**: Rendering defaults match the reference format

pub mod constants;
