// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the verdict float comparison engine.
//!
//! This standalone crate carries the `f32` comparison and proves its
//! properties over every bit pattern using Kani. `f32` keeps the state
//! space small enough for the solver; the `f64` engine has the same shape.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: approx_eq_f32 never panics, NaN and infinities included
//! 2. **Symmetry**: approx_eq_f32(a, b, e) == approx_eq_f32(b, a, e)
//! 3. **Identity**: equal operands are always close
//! 4. **NaN**: a NaN operand is never close

/// Smallest positive normal `f32`.
pub const MIN_NORMAL: f32 = f32::MIN_POSITIVE;

// ============================================================================
// COMPARISON ENGINE (copied from src/approx.rs)
// ============================================================================

fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Relative comparison with an absolute fallback near zero.
pub fn approx_eq_f32(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    if a == 0.0 || b == 0.0 || abs(a) + abs(b) < MIN_NORMAL {
        return abs(a - b) < epsilon * MIN_NORMAL;
    }
    let sum = abs(a) + abs(b);
    abs(a - b) / sum.min(f32::MAX) < epsilon
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify approx_eq_f32 never panics for any inputs.
    #[kani::proof]
    fn verify_approx_no_panic() {
        let a: f32 = kani::any();
        let b: f32 = kani::any();
        let epsilon: f32 = kani::any();

        let _ = approx_eq_f32(a, b, epsilon);
    }

    /// Verify argument order never changes the answer.
    #[kani::proof]
    fn verify_approx_symmetric() {
        let a: f32 = kani::any();
        let b: f32 = kani::any();
        let epsilon: f32 = kani::any();

        kani::assert(
            approx_eq_f32(a, b, epsilon) == approx_eq_f32(b, a, epsilon),
            "approx_eq_f32 must be symmetric",
        );
    }

    /// Verify equal operands are close at every tolerance.
    #[kani::proof]
    fn verify_approx_identity() {
        let a: f32 = kani::any();
        let epsilon: f32 = kani::any();
        kani::assume(!a.is_nan());

        kani::assert(approx_eq_f32(a, a, epsilon), "a value must be close to itself");
        kani::assert(approx_eq_f32(0.0, -0.0, epsilon), "signed zeros must be close");
    }

    /// Verify NaN is never close to anything.
    #[kani::proof]
    fn verify_approx_nan() {
        let a: f32 = kani::any();
        let epsilon: f32 = kani::any();

        kani::assert(!approx_eq_f32(f32::NAN, a, epsilon), "NaN must never be close");
    }
}
