// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The checks.
//!
//! Each function evaluates one predicate and, only if it does not hold,
//! reports one [`Failure`] to the given [`Reporter`]. Nothing here panics on a
//! failed check, so a test can keep going and report everything that is
//! wrong. The exceptions are misuse, not failure: [`matches`] panics on a
//! pattern that does not compile.
//!
//! # Usage
//!
//! ```
//! use verdict::{check, Recorder};
//!
//! let mut t = Recorder::new();
//! check::eq(&mut t, 2 + 2, 4);
//! check::contains(&mut t, &[1, 2, 3, 4, 5], &4);
//! check::matches(&mut t, "Mary had a little lamb.", "^Mary");
//! check::approx(&mut t, 2.0_f64, 1.99, 0.01);
//! check::nil(&mut t, &None::<Vec<u8>>);
//! t.finish();
//! ```
//!
//! All checks are `#[track_caller]`: failures point at the test line.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::approx::Float;
use crate::length::Length;
use crate::nullable::{Kind, Nullable};
use crate::outcome::Outcome;
use crate::pattern::Pattern;
use crate::report::{Failure, Reporter};

#[track_caller]
fn fail<R: Reporter + ?Sized>(t: &mut R, message: String) {
    t.report(Failure::new(message));
}

// ============================================================================
// BOOLEANS AND EQUALITY
// ============================================================================

/// Check that `val` is `true`.
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(t: &mut R, val: bool) {
    if !val {
        fail(t, "failed asserting true".to_string());
    }
}

/// Check that `val` is `false`.
#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(t: &mut R, val: bool) {
    if val {
        fail(t, "failed asserting false".to_string());
    }
}

/// Structural equality: derive `PartialEq` on composite types.
#[track_caller]
pub fn eq<R, T>(t: &mut R, val: T, expected: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if val != expected {
        fail(
            t,
            format!("failed asserting {:?} == {:?} (expected)", val, expected),
        );
    }
}

/// Check that `val` and `other` differ.
#[track_caller]
pub fn ne<R, T>(t: &mut R, val: T, other: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if val == other {
        fail(t, format!("failed asserting {:?} != {:?}", val, other));
    }
}

// ============================================================================
// ORDERING
// ============================================================================
//
// Incomparable operands (`partial_cmp` is `None`, e.g. NaN) fail every
// ordering check.

/// Check `val > threshold`.
#[track_caller]
pub fn gt<R, T>(t: &mut R, val: T, threshold: T)
where
    R: Reporter + ?Sized,
    T: PartialOrd + Debug,
{
    if !matches!(val.partial_cmp(&threshold), Some(Ordering::Greater)) {
        fail(
            t,
            format!("failed asserting {:?} > {:?} (threshold)", val, threshold),
        );
    }
}

/// Check `val >= threshold`.
#[track_caller]
pub fn gte<R, T>(t: &mut R, val: T, threshold: T)
where
    R: Reporter + ?Sized,
    T: PartialOrd + Debug,
{
    if !matches!(val.partial_cmp(&threshold), Some(Ordering::Greater | Ordering::Equal)) {
        fail(
            t,
            format!("failed asserting {:?} >= {:?} (threshold)", val, threshold),
        );
    }
}

/// Check `val < threshold`.
#[track_caller]
pub fn lt<R, T>(t: &mut R, val: T, threshold: T)
where
    R: Reporter + ?Sized,
    T: PartialOrd + Debug,
{
    if !matches!(val.partial_cmp(&threshold), Some(Ordering::Less)) {
        fail(
            t,
            format!("failed asserting {:?} < {:?} (threshold)", val, threshold),
        );
    }
}

/// Check `val <= threshold`.
#[track_caller]
pub fn lte<R, T>(t: &mut R, val: T, threshold: T)
where
    R: Reporter + ?Sized,
    T: PartialOrd + Debug,
{
    if !matches!(val.partial_cmp(&threshold), Some(Ordering::Less | Ordering::Equal)) {
        fail(
            t,
            format!("failed asserting {:?} <= {:?} (threshold)", val, threshold),
        );
    }
}

// ============================================================================
// SIZE AND MEMBERSHIP
// ============================================================================

/// Check that `val` holds exactly `count` elements (chars for text).
#[track_caller]
pub fn len<R, L>(t: &mut R, val: &L, count: usize)
where
    R: Reporter + ?Sized,
    L: Length + ?Sized,
{
    let actual = val.length();
    if actual != count {
        fail(
            t,
            format!("failed asserting length {} == {} (expected)", actual, count),
        );
    }
}

/// Check that `val` has length zero.
#[track_caller]
pub fn empty<R, L>(t: &mut R, val: &L)
where
    R: Reporter + ?Sized,
    L: Length + ?Sized,
{
    let actual = val.length();
    if actual != 0 {
        fail(t, format!("failed asserting empty (length {})", actual));
    }
}

/// Linear scan; stops at the first element equal to `needle`.
#[track_caller]
pub fn contains<R, T>(t: &mut R, haystack: &[T], needle: &T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    if !haystack.iter().any(|item| item == needle) {
        fail(
            t,
            format!("failed asserting sequence contains {:?}", needle),
        );
    }
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Check that `pattern` matches somewhere in `val`.
///
/// # Panics
///
/// Panics if `pattern` does not compile. A broken pattern is a bug in the
/// test, not a failed check.
#[track_caller]
pub fn matches<R: Reporter + ?Sized>(t: &mut R, val: &str, pattern: &str) {
    let pattern = match Pattern::new(pattern) {
        Ok(pattern) => pattern,
        Err(err) => panic!("{err}"),
    };
    matches_pattern(t, val, &pattern);
}

/// [`matches`] with a precompiled [`Pattern`].
#[track_caller]
pub fn matches_pattern<R: Reporter + ?Sized>(t: &mut R, val: &str, pattern: &Pattern) {
    if !pattern.is_match(val) {
        fail(
            t,
            format!(
                "failed asserting {:?} matches {:?} (pattern)",
                val,
                pattern.as_str()
            ),
        );
    }
}

// ============================================================================
// FLOATS
// ============================================================================

/// Approximate equality within relative tolerance `epsilon`.
///
/// The width comes from the operand type; see [`crate::approx`] for the
/// comparison itself.
#[track_caller]
pub fn approx<R, F>(t: &mut R, val: F, expected: F, epsilon: F)
where
    R: Reporter + ?Sized,
    F: Float,
{
    if !val.approx_eq(expected, epsilon) {
        fail(
            t,
            format!(
                "failed asserting {:?} approximately equals {:?} (expected, epsilon {:?})",
                val, expected, epsilon
            ),
        );
    }
}

// ============================================================================
// NULLABILITY
// ============================================================================

/// Check that a value is nil: absent, or a wrapper around a null handle.
///
/// Needs [`Nullable`] on the value; see [`never_null!`](crate::never_null)
/// for opting a type in, or [`none`] for an `Option` of any type.
#[track_caller]
pub fn nil<R, N>(t: &mut R, val: &N)
where
    R: Reporter + ?Sized,
    N: Nullable + ?Sized,
{
    if !val.is_null() {
        fail(t, format!("failed asserting nil ({})", val.kind()));
    }
}

/// Check that a value is not nil.
#[track_caller]
pub fn not_nil<R, N>(t: &mut R, val: &N)
where
    R: Reporter + ?Sized,
    N: Nullable + ?Sized,
{
    if val.is_null() {
        fail(t, format!("failed asserting not nil ({})", val.kind()));
    }
}

/// Check that an `Option` of any type is `None`.
#[track_caller]
pub fn none<R, T>(t: &mut R, val: &Option<T>)
where
    R: Reporter + ?Sized,
{
    if val.is_some() {
        fail(t, format!("failed asserting nil ({})", Kind::Handle));
    }
}

/// Check that an `Option` of any type is `Some`.
#[track_caller]
pub fn some<R, T>(t: &mut R, val: &Option<T>)
where
    R: Reporter + ?Sized,
{
    if val.is_none() {
        fail(t, format!("failed asserting not nil ({})", Kind::Handle));
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Check that an error is present and its message is exactly `expected`.
///
/// An absent error is reported once and the message is not compared.
#[track_caller]
pub fn error<R, E>(t: &mut R, err: Option<&E>, expected: &str)
where
    R: Reporter + ?Sized,
    E: Display + ?Sized,
{
    match err {
        None => fail(t, "failed asserting error is not nil".to_string()),
        Some(err) => eq(t, err.to_string().as_str(), expected),
    }
}

/// [`error`] on the `Err` side of a `Result`.
#[track_caller]
pub fn error_of<R, T, E>(t: &mut R, result: &Result<T, E>, expected: &str)
where
    R: Reporter + ?Sized,
    E: Display,
{
    error(t, result.as_ref().err(), expected);
}

// ============================================================================
// PANICS
// ============================================================================

/// Check that a [`guard`](crate::guard)ed call panicked.
#[track_caller]
pub fn panics<R: Reporter + ?Sized, T>(t: &mut R, outcome: &Outcome<T>) {
    if !outcome.is_panic() {
        fail(t, "failed asserting panic".to_string());
    }
}

/// Check that a [`guard`](crate::guard)ed call returned normally.
#[track_caller]
pub fn no_panic<R: Reporter + ?Sized, T>(t: &mut R, outcome: &Outcome<T>) {
    if let Some(payload) = outcome.panic_payload() {
        fail(
            t,
            format!(
                "failed asserting no panic (payload: {})",
                payload.message().unwrap_or("<non-string payload>")
            ),
        );
    }
}
