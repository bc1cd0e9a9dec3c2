// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate equality for `f32` and `f64`.
//!
//! Two floats are "close enough" when their symmetric relative error is below
//! `epsilon`. Relative error falls apart near zero, so pairs that involve an
//! exact zero (or that are both subnormal) are compared in absolute terms
//! instead, against `epsilon` scaled down to the smallest normal magnitude.
//!
//! # Algorithm
//!
//! ```text
//! a == b                                   → true   (covers +0.0 == -0.0)
//! a == 0 ∨ b == 0 ∨ |a|+|b| < MIN_NORMAL   → |a-b| < ε · MIN_NORMAL
//! otherwise                                → |a-b| / min(|a|+|b|, MAX) < ε
//! ```
//!
//! The denominator is the *sum* of magnitudes, not the larger one, so the test
//! is symmetric and a little more forgiving than `max`-based variants. It is
//! capped at `MAX` because a sum that overflows to infinity would otherwise
//! make any finite difference look like zero relative error.
//!
//! There is one function per width so each keeps its own exact constants.
//! [`Float`] is only the dispatch: `check::approx` picks the width from the
//! operand type.
//!
//! NaN never compares approximately equal to anything, itself included.

/// Smallest positive normal `f32` (`0x0080_0000`).
pub const F32_MIN_NORMAL: f32 = f32::MIN_POSITIVE;

/// Smallest positive normal `f64` (`0x0010_0000_0000_0000`).
pub const F64_MIN_NORMAL: f64 = f64::MIN_POSITIVE;

/// Which comparison decided a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    /// The operands compared equal outright.
    Identical,
    /// Zero or subnormal operands: bounded absolute difference.
    Absolute,
    /// Everything else: symmetric relative error.
    Relative,
}

/// Returns true if `a` and `b` are within relative tolerance `epsilon`.
///
/// ```
/// use verdict::approx_eq_f64;
///
/// assert!(approx_eq_f64(2.0, 1.99, 0.01));
/// assert!(!approx_eq_f64(2.0, 1.9, 0.01));
/// assert!(approx_eq_f64(0.0, -0.0, 0.0));
/// ```
pub fn approx_eq_f64(a: f64, b: f64, epsilon: f64) -> bool {
    let branch = branch_f64(a, b);
    log::trace!("approx_eq_f64({a:e}, {b:e}, {epsilon:e}) via {branch:?}");

    match branch {
        Branch::Identical => true,
        Branch::Absolute => abs_f64(a - b) < epsilon * F64_MIN_NORMAL,
        Branch::Relative => {
            let sum = abs_f64(a) + abs_f64(b);
            abs_f64(a - b) / sum.min(f64::MAX) < epsilon
        }
    }
}

/// Returns true if `a` and `b` are within relative tolerance `epsilon`.
///
/// Same algorithm as [`approx_eq_f64`] with `f32` constants.
pub fn approx_eq_f32(a: f32, b: f32, epsilon: f32) -> bool {
    let branch = branch_f32(a, b);
    log::trace!("approx_eq_f32({a:e}, {b:e}, {epsilon:e}) via {branch:?}");

    match branch {
        Branch::Identical => true,
        Branch::Absolute => abs_f32(a - b) < epsilon * F32_MIN_NORMAL,
        Branch::Relative => {
            let sum = abs_f32(a) + abs_f32(b);
            abs_f32(a - b) / sum.min(f32::MAX) < epsilon
        }
    }
}

pub(crate) fn branch_f64(a: f64, b: f64) -> Branch {
    // INVARIANT: ordinary equality first, so +0.0 and -0.0 never reach division
    if a == b {
        return Branch::Identical;
    }
    // INVARIANT: relative error is only taken when the sum is a normal number
    if a == 0.0 || b == 0.0 || abs_f64(a) + abs_f64(b) < F64_MIN_NORMAL {
        Branch::Absolute
    } else {
        Branch::Relative
    }
}

pub(crate) fn branch_f32(a: f32, b: f32) -> Branch {
    // INVARIANT: ordinary equality first, so +0.0 and -0.0 never reach division
    if a == b {
        return Branch::Identical;
    }
    // INVARIANT: relative error is only taken when the sum is a normal number
    if a == 0.0 || b == 0.0 || abs_f32(a) + abs_f32(b) < F32_MIN_NORMAL {
        Branch::Absolute
    } else {
        Branch::Relative
    }
}

/// Magnitude, with an exact zero (of either sign) mapped to `+0.0`.
#[inline]
fn abs_f64(value: f64) -> f64 {
    if value < 0.0 {
        -value
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[inline]
fn abs_f32(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point width the approximation engine supports.
///
/// Sealed: implemented for `f32` and `f64` only. Each impl forwards to the
/// concrete function for its width.
pub trait Float: sealed::Sealed + Copy + std::fmt::Debug {
    /// Approximate equality within relative tolerance `epsilon`.
    fn approx_eq(self, other: Self, epsilon: Self) -> bool;
}

impl Float for f32 {
    #[inline]
    fn approx_eq(self, other: Self, epsilon: Self) -> bool {
        approx_eq_f32(self, other, epsilon)
    }
}

impl Float for f64 {
    #[inline]
    fn approx_eq(self, other: Self, epsilon: Self) -> bool {
        approx_eq_f64(self, other, epsilon)
    }
}
