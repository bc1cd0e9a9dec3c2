// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the approximate float comparison.
//!
//! Feeds raw bit patterns (NaN payloads, subnormals, infinities, signed
//! zeros) through both widths and checks the properties every caller relies
//! on: no panic, symmetry, NaN never close, and the check agreeing with the
//! plain predicate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use verdict::{approx_eq_f32, approx_eq_f64, check};

#[derive(Debug, Arbitrary)]
struct CompareInput {
    a: u64,
    b: u64,
    epsilon: u64,
    a32: u32,
    b32: u32,
    epsilon32: u32,
}

fuzz_target!(|input: CompareInput| {
    let a = f64::from_bits(input.a);
    let b = f64::from_bits(input.b);
    let epsilon = f64::from_bits(input.epsilon);

    let close = approx_eq_f64(a, b, epsilon);
    assert_eq!(close, approx_eq_f64(b, a, epsilon), "f64 symmetry");
    if a.is_nan() || b.is_nan() {
        assert!(!close, "NaN compared close");
    }
    if a == b {
        assert!(close, "equal operands compared far");
    }

    let mut sink: Vec<verdict::Failure> = Vec::new();
    check::approx(&mut sink, a, b, epsilon);
    assert_eq!(sink.is_empty(), close, "check disagrees with predicate");

    let a = f32::from_bits(input.a32);
    let b = f32::from_bits(input.b32);
    let epsilon = f32::from_bits(input.epsilon32);

    let close = approx_eq_f32(a, b, epsilon);
    assert_eq!(close, approx_eq_f32(b, a, epsilon), "f32 symmetry");
    if a.is_nan() || b.is_nan() {
        assert!(!close, "NaN compared close");
    }
});
