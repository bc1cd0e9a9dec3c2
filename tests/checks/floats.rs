//! Approximate float checks through the public API.

use crate::common::{record, single_message, SUBNORMAL_PAIR_F32, SUBNORMAL_PAIR_F64};
use verdict::{approx_eq_f32, approx_eq_f64, check, Float, F32_MIN_NORMAL, F64_MIN_NORMAL};

#[test]
fn test_tolerance_boundary_both_widths() {
    assert!(approx_eq_f64(2.0, 1.99, 0.01));
    assert!(!approx_eq_f64(2.0, 1.9, 0.01));
    assert!(approx_eq_f32(2.0, 1.99, 0.01));
    assert!(!approx_eq_f32(2.0, 1.9, 0.01));
}

#[test]
fn test_signed_zero_equal_at_any_tolerance() {
    for eps in [0.0, 1e-300, 1.0] {
        assert!(approx_eq_f64(0.0, -0.0, eps));
    }
    for eps in [0.0_f32, 1e-30, 1.0] {
        assert!(approx_eq_f32(-0.0, 0.0, eps));
    }
}

#[test]
fn test_subnormal_pairs_compare_absolutely() {
    let (a, b) = SUBNORMAL_PAIR_F64;
    assert!(a + b < F64_MIN_NORMAL);
    assert!(approx_eq_f64(a, b, 0.01));
    assert!(approx_eq_f64(b, a, 0.01));

    let (a, b) = SUBNORMAL_PAIR_F32;
    assert!(a + b < F32_MIN_NORMAL);
    assert!(approx_eq_f32(a, b, 0.01));
}

#[test]
fn test_exact_zero_against_tiny_values() {
    // ε · MIN_NORMAL is the absolute bound once an operand is zero
    assert!(approx_eq_f64(0.0, F64_MIN_NORMAL / 4.0, 0.5));
    assert!(!approx_eq_f64(0.0, F64_MIN_NORMAL, 0.5));
    assert!(!approx_eq_f32(0.0, f32::EPSILON, 1.0));
}

#[test]
fn test_overflow_cap() {
    assert!(!approx_eq_f64(f64::MAX, f64::MAX / 2.0, 0.01));
    assert!(!approx_eq_f64(-f64::MAX, -f64::MAX / 2.0, 0.01));
    assert!(!approx_eq_f32(f32::MAX, f32::MAX / 2.0, 0.01));
}

#[test]
fn test_nan_is_never_close() {
    assert!(!approx_eq_f64(f64::NAN, f64::NAN, f64::INFINITY));
    assert!(!approx_eq_f32(f32::NAN, 0.0, 1.0));
}

#[test]
fn test_trait_dispatch() {
    assert!(1.0_f64.approx_eq(1.0 + 1e-12, 1e-9));
    assert!(!1.0_f32.approx_eq(1.1, 1e-3));
}

#[test]
fn test_check_approx_message() {
    let failures = record(|t| {
        check::approx(t, 2.0_f64, 1.99, 0.01);
        check::approx(t, 2.0_f32, 1.9, 0.01);
    });
    assert_eq!(
        single_message(&failures),
        "failed asserting 2.0 approximately equals 1.9 (expected, epsilon 0.01)"
    );
}
