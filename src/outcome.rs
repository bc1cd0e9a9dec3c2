// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Panics as values.
//!
//! [`guard`] runs a closure and turns an unwinding panic into
//! [`Outcome::Panicked`], so a test can ask "did that panic?" with an ordinary
//! check instead of `#[should_panic]`, and keep going afterwards.
//!
//! Only the closure is guarded. The process-wide panic hook is left alone, so
//! guarded panics still print their message and nothing leaks into tests
//! running on other threads.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// What a panicking closure left behind.
pub struct PanicPayload(Box<dyn Any + Send + 'static>);

impl PanicPayload {
    /// The panic message, if the payload was a string.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.0.downcast_ref::<&'static str>() {
            Some(*message)
        } else {
            self.0.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// The raw payload, for non-string panics.
    pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
        self.0
    }
}

impl fmt::Debug for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("PanicPayload").field(&message).finish(),
            None => f.write_str("PanicPayload(<non-string payload>)"),
        }
    }
}

/// Result of a guarded call.
#[derive(Debug)]
pub enum Outcome<T> {
    Returned(T),
    Panicked(PanicPayload),
}

impl<T> Outcome<T> {
    pub fn is_panic(&self) -> bool {
        matches!(self, Outcome::Panicked(_))
    }

    pub fn returned(self) -> Option<T> {
        match self {
            Outcome::Returned(value) => Some(value),
            Outcome::Panicked(_) => None,
        }
    }

    pub fn panic_payload(&self) -> Option<&PanicPayload> {
        match self {
            Outcome::Returned(_) => None,
            Outcome::Panicked(payload) => Some(payload),
        }
    }
}

/// Run `f`, capturing a panic instead of propagating it.
///
/// The closure may borrow test state mutably. If it panics halfway through,
/// that state can be left partially updated; the payload is all `guard`
/// hands back, so check the state with that in mind.
///
/// ```
/// use verdict::{guard, Outcome};
///
/// let outcome = guard(|| -> u8 { panic!("nope") });
/// assert!(outcome.is_panic());
///
/// let outcome = guard(|| 2 + 2);
/// assert!(matches!(outcome, Outcome::Returned(4)));
///
/// let mut seen = Vec::new();
/// let outcome = guard(|| {
///     seen.push(1);
///     panic!("after the push");
/// });
/// assert!(outcome.is_panic());
/// assert_eq!(seen, [1]);
/// ```
pub fn guard<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Returned(value),
        Err(payload) => Outcome::Panicked(PanicPayload(payload)),
    }
}
