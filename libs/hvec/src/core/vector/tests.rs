//! Tests for the HVec value type.

use super::*;
use approx::assert_relative_eq;

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Default-constructed vectors exist and are zero.
#[test]
fn default_vectors_are_zero() {
    let v2 = HVec::<2>::default();
    let v3 = HVec::<3>::default();
    assert_eq!(v2.into_array(), [0.0, 0.0]);
    assert_eq!(v3.into_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn size_reports_dimension() {
    assert_eq!(HVec::new([1.0]).size(), 1);
    assert_eq!(HVec::new([0.1, 0.2, 0.3]).size(), 3);
    assert_eq!(HVec::<7>::zero().size(), 7);
}

#[test]
fn component_recovers_initializer() {
    let v = HVec::new([0.1, 0.2, 0.3]);
    assert_eq!(v.component(0), 0.1);
    assert_eq!(v.component(1), 0.2);
    assert_eq!(v[2], 0.3);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn component_out_of_range_panics() {
    let v = HVec::new([0.1, 0.2, 0.3]);
    let _ = v.component(3);
}

#[test]
fn try_component_reports_bounds() {
    let v = HVec::new([0.1, 0.2, 0.3]);
    assert_eq!(v.try_component(0), Ok(0.1));
    assert_eq!(
        v.try_component(3),
        Err(VectorError::IndexOutOfBounds {
            index: 3,
            dimension: 3
        })
    );
}

#[test]
fn slice_construction_checks_arity() {
    let ok = HVec::<3>::try_from(&[1.0_f32, 2.0, 3.0][..]);
    assert_eq!(ok.map(HVec::into_array), Ok([1.0, 2.0, 3.0]));

    let short = HVec::<3>::try_from(&[1.0_f32, 2.0][..]);
    assert_eq!(
        short.map(HVec::into_array),
        Err(VectorError::ArityMismatch {
            expected: 3,
            actual: 2
        })
    );

    let long = HVec::<2>::try_from(&[1.0_f32, 2.0, 3.0][..]);
    assert!(matches!(
        long,
        Err(VectorError::ArityMismatch {
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn array_conversions() {
    let v: HVec<2> = [3.0, 4.0].into();
    let back: [f32; 2] = v.into();
    assert_eq!(back, [3.0, 4.0]);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![3.0, 4.0]);
}

// =============================================================================
// MAGNITUDE
// =============================================================================

#[test]
fn magnitude_of_reference_vectors() {
    assert_relative_eq!(
        HVec::new([1.0, 2.0, 3.0]).magnitude(),
        3.741_657,
        epsilon = 1e-5
    );
    assert_eq!(HVec::new([0.0, 0.0, 1.0]).magnitude(), 1.0);
}

#[test]
fn magnitude_zero_only_for_zero_vector() {
    assert_eq!(HVec::<4>::zero().magnitude(), 0.0);
    assert!(HVec::new([0.0, -1.0e-3, 0.0]).magnitude() > 0.0);
}

#[test]
fn magnitude_ignores_sign() {
    assert_eq!(
        HVec::new([-3.0, 4.0]).magnitude(),
        HVec::new([3.0, -4.0]).magnitude()
    );
}

// =============================================================================
// ORDERING AND EQUALITY
// =============================================================================

#[test]
fn equal_to_self() {
    let v = HVec::new([0.1, 0.2, 0.3]);
    assert!(v == v);
}

#[test]
fn equal_to_identical_vector() {
    assert!(HVec::new([0.1, 0.2, 0.3]) == HVec::new([0.1, 0.2, 0.3]));
}

#[test]
fn not_equal_to_zero() {
    assert!(HVec::<3>::zero() != HVec::new([0.1, 0.2, 0.3]));
}

#[test]
fn equality_ignores_direction() {
    let a = HVec::new([1.0, 0.0, 0.0]);
    let b = HVec::new([0.0, 0.0, -1.0]);
    assert!(a == b);
    assert!(!a.approx_eq(&b));
}

#[test]
fn less_than_by_magnitude() {
    let a = HVec::new([0.1, 0.2, 0.3]);
    let b = HVec::new([0.1, 0.2, 0.1]);
    assert!(b < a);
    assert!(!(a < HVec::zero()));
}

#[test]
fn greater_than_by_magnitude() {
    let a = HVec::new([0.1, -0.2, -0.3]);
    let b = HVec::new([0.1, 0.1, 0.0]);
    assert!(a > b);
}

#[test]
fn greater_or_equal() {
    let a = HVec::new([0.1, 0.2, 0.3]);
    let b = HVec::new([0.0, 0.0, 0.3]);
    let c = HVec::new([0.0, 0.0, 0.3]);
    assert!(a >= b);
    assert!(c >= b);
}

#[test]
fn less_or_equal() {
    let a = HVec::new([0.1, 0.2, 0.3]);
    let b = HVec::<3>::zero();
    assert!(b <= a);
    assert!(b <= b);
}

/// Different directions, same length: neither strictly ordered.
#[test]
fn ties_are_neither_less_nor_greater() {
    let a = HVec::new([3.0, 4.0]);
    let b = HVec::new([-4.0, 3.0]);
    assert!(!(a < b));
    assert!(!(a > b));
    assert!(a <= b && a >= b);
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
}

#[test]
fn tolerance_equality_is_strict_at_delta() {
    let a = HVec::new([1.0, 1.0]);
    let b = HVec::new([1.5, 1.0]);
    assert!(a.equals(&b, 0.6));
    assert!(!a.equals(&b, 0.5));
    assert!(!a.equals(&b, 0.4));
}

#[test]
fn tolerance_equality_uses_absolute_delta() {
    let a = HVec::new([1.0, 2.0]);
    let b = HVec::new([1.05, 2.0]);
    assert!(a.equals(&b, -0.1));
}

#[test]
fn approx_eq_default_delta() {
    let a = HVec::new([0.1, 0.2, 0.3]);
    assert!(a.approx_eq(&HVec::new([0.100_05, 0.2, 0.299_95])));
    assert!(!a.approx_eq(&HVec::new([0.101, 0.2, 0.3])));
}

#[test]
fn approx_eq_with_config() {
    let cfg = VectorConfig::new(0.05, 6).unwrap();
    let a = HVec::new([1.0, 2.0]);
    assert!(a.approx_eq_with(&HVec::new([1.04, 1.96]), &cfg));
    assert!(!a.approx_eq_with(&HVec::new([1.06, 2.0]), &cfg));
}

// =============================================================================
// ARITHMETIC
// =============================================================================

#[test]
fn sum_is_componentwise() {
    let a = HVec::new([1.0, 2.0, 3.0]);
    let b = HVec::new([0.5, -1.0, 4.0]);
    assert_eq!(a.sum(&b).into_array(), [1.5, 1.0, 7.0]);
    assert_eq!(a.into_array(), [1.0, 2.0, 3.0]);
    assert_eq!(b.into_array(), [0.5, -1.0, 4.0]);
}

#[test]
fn scale_and_negate() {
    let a = HVec::new([1.0, -2.0]);
    assert_eq!(a.scale(3.0).into_array(), [3.0, -6.0]);
    assert_eq!(a.negate().into_array(), [-1.0, 2.0]);
    assert_eq!(a.into_array(), [1.0, -2.0]);
}

#[test]
fn difference_is_componentwise() {
    let a = HVec::new([1.0, 2.0, 3.0]);
    let b = HVec::new([0.5, -1.0, 4.0]);
    assert_eq!(a.difference(&b).into_array(), [0.5, 3.0, -1.0]);
}

#[test]
fn sum_then_difference_round_trips() {
    let a = HVec::new([0.1, -0.7, 12.5]);
    let b = HVec::new([3.3, 0.25, -8.0]);
    assert!(a.sum(&b).difference(&b).approx_eq(&a));
}

#[test]
fn operators_match_methods() {
    let a = HVec::new([1.0, 2.0]);
    let b = HVec::new([3.0, 5.0]);
    assert!((a + b).approx_eq(&a.sum(&b)));
    assert!((a - b).approx_eq(&a.difference(&b)));
    assert!((-a).approx_eq(&a.negate()));
    assert!((a * 2.0).approx_eq(&a.scale(2.0)));
}

// =============================================================================
// NORMALIZATION
// =============================================================================

#[test]
fn normalize_uses_largest_absolute_component() {
    let v = HVec::new([0.1, -0.7, 0.1]).normalize();
    assert_relative_eq!(v[1], -1.0, epsilon = 1e-6);
    assert_relative_eq!(v[0], 0.1 / 0.7, epsilon = 1e-6);
    assert_relative_eq!(v[2], 0.1 / 0.7, epsilon = 1e-6);
}

#[test]
fn normalize_is_not_unit_length() {
    let v = HVec::new([1.0, 1.0]).normalize();
    assert_eq!(v.into_array(), [1.0, 1.0]);
    assert!(v.magnitude() > 1.0);
}

#[test]
fn normalize_zero_vector_is_nan() {
    let v = HVec::<3>::zero().normalize();
    assert!(v.iter().all(|c| c.is_nan()));
}

/// A subnormal maximum has no finite reciprocal; the result must stay finite.
#[test]
fn normalize_subnormal_vector_stays_finite() {
    let v = HVec::new([1.0e-40, 0.0]);
    assert_eq!(v.normalize().into_array(), [1.0, 0.0]);
    assert_eq!(v.try_normalize().map(HVec::into_array), Ok([1.0, 0.0]));

    let w = HVec::new([0.0, -1.0e-42, 5.0e-43]).normalize();
    assert!(w.iter().all(|c| c.is_finite()));
    assert_eq!(w[1], -1.0);
}

/// NaN magnitudes are unordered, so even the non-strict comparisons fail.
#[test]
fn nan_magnitude_fails_every_comparison() {
    let nan = HVec::<2>::zero().normalize();
    let one = HVec::new([1.0, 0.0]);
    assert!(!(nan < one) && !(nan > one));
    assert!(!(nan <= one) && !(nan >= one));
    assert_eq!(nan.partial_cmp(&one), None);
}

#[test]
fn try_normalize_rejects_zero_vector() {
    assert_eq!(
        HVec::<3>::zero().try_normalize().map(HVec::into_array),
        Err(VectorError::DegenerateNormalize)
    );
    let ok = HVec::new([0.0, 4.0]).try_normalize().unwrap();
    assert_eq!(ok.into_array(), [0.0, 1.0]);
}

#[test]
fn max_abs_is_l_infinity_norm() {
    assert_eq!(HVec::new([0.5, -3.0, 2.0]).max_abs(), 3.0);
    assert_eq!(HVec::<2>::zero().max_abs(), 0.0);
}

// =============================================================================
// DOT PRODUCT
// =============================================================================

#[test]
fn dot_of_orthogonal_axes_is_zero() {
    assert_eq!(
        HVec::new([1.0, 0.0, 0.0]).dot(&HVec::new([0.0, 1.0, 0.0])),
        0.0
    );
}

#[test]
fn dot_of_reference_vectors() {
    assert_eq!(
        HVec::new([1.0, 2.0, 3.0]).dot(&HVec::new([4.0, 5.0, 6.0])),
        32.0
    );
}

/// Fractional products must not be truncated.
#[test]
fn dot_keeps_fractions() {
    let d = HVec::new([0.5, 0.25]).dot(&HVec::new([0.5, 0.5]));
    assert_relative_eq!(d, 0.375);
}

#[test]
fn dot_with_self_is_magnitude_squared() {
    let v = HVec::new([1.0, 2.0, 3.0]);
    assert_relative_eq!(v.dot(&v), v.magnitude() * v.magnitude(), epsilon = 1e-5);
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn describe_reference_vector() {
    assert_eq!(
        HVec::new([0.1, 0.2, 0.3]).describe(),
        "HVec<3>{0.100000 0.200000 0.300000}"
    );
}

#[test]
fn describe_negative_and_single() {
    assert_eq!(
        HVec::new([-0.1, -0.2, 0.0]).describe(),
        "HVec<3>{-0.100000 -0.200000 0.000000}"
    );
    assert_eq!(HVec::new([2.5]).describe(), "HVec<1>{2.500000}");
}

#[test]
fn display_matches_describe() {
    let v = HVec::new([0.6, 0.3, 0.3]);
    assert_eq!(format!("{v}"), v.describe());
    assert_eq!(format!("{v:.1}"), "HVec<3>{0.6 0.3 0.3}");
}

#[test]
fn describe_with_config_precision() {
    let cfg = VectorConfig::new(1.0e-4, 0).unwrap();
    assert_eq!(HVec::new([1.4, 2.6]).describe_with(&cfg), "HVec<2>{1 3}");
}
