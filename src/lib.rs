// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Non-fatal test assertions with careful approximate float comparison.
//!
//! `assert!` stops a test at the first problem. The checks in this crate
//! report a failure and keep going, so one run shows everything that is
//! wrong. The test fails once, at the end, with a summary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  approx.rs  │     │ nullable.rs  │     │  outcome.rs  │
//! │ (f32 / f64  │     │ (Kind, null  │     │ (guard,      │
//! │  engine)    │     │  handles)    │     │  Outcome)    │
//! └──────┬──────┘     └──────┬───────┘     └──────┬───────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      check.rs                        │
//! │   eq, gt, len, contains, matches, approx, nil, ...   │
//! └──────────────────────────┬──────────────────────────┘
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      report.rs                       │
//! │   Reporter trait, Failure, Recorder (summary, drop)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use verdict::{check, guard, Recorder};
//!
//! let mut t = Recorder::new();
//! check::eq(&mut t, "foo", "foo");
//! check::gte(&mut t, 10, 10);
//! check::len(&mut t, &[1, 2, 3], 3);
//! check::approx(&mut t, 1.0_f32, 1.000_001, 1e-5);
//! check::panics(&mut t, &guard(|| -> () { panic!("expected") }));
//! t.finish();
//! ```
//!
//! With the `macros` feature (on by default) the recorder can be wired up by
//! an attribute instead:
//!
//! ```ignore
//! #[verdict::test]
//! fn parses(t: &mut verdict::Recorder) {
//!     verdict::check::error_of(t, &"x".parse::<u8>(), "invalid digit found in string");
//! }
//! ```

// Module declarations
pub mod approx;
pub mod check;
mod error;
mod length;
mod nullable;
mod outcome;
mod pattern;
mod report;
mod settings;
pub mod testing;

// Re-exports for public API
pub use approx::{approx_eq_f32, approx_eq_f64, Float, F32_MIN_NORMAL, F64_MIN_NORMAL};
pub use error::AssertError;
pub use length::Length;
pub use nullable::{Kind, Nullable};
pub use outcome::{guard, Outcome, PanicPayload};
pub use pattern::Pattern;
pub use report::{Failure, Location, Recorder, Reporter};
pub use settings::{ColorMode, Settings};

#[cfg(feature = "macros")]
pub use verdict_macros::test;
