//! Conversions between [`HVec`] and `glam`'s single-precision vectors.
//!
//! Lets callers hand vectors to code built on `glam` without copying
//! components by hand.

use glam::{Vec2, Vec3, Vec4};

use crate::core::vector::HVec;

macro_rules! impl_glam_conversions {
    ($n:literal, $glam:ty) => {
        impl From<$glam> for HVec<$n> {
            fn from(v: $glam) -> Self {
                HVec::new(v.to_array())
            }
        }

        impl From<HVec<$n>> for $glam {
            fn from(v: HVec<$n>) -> Self {
                <$glam>::from_array(v.into_array())
            }
        }
    };
}

impl_glam_conversions!(2, Vec2);
impl_glam_conversions!(3, Vec3);
impl_glam_conversions!(4, Vec4);
