// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The reporting side of a check: where failures go.
//!
//! A check never panics on its own. It hands a [`Failure`] to whatever
//! [`Reporter`] it was given and returns, so one test can surface several
//! independent problems in a single run. The test decides the outcome at the
//! end, normally by letting its [`Recorder`] finish.
//!
//! Every check is `#[track_caller]`, and so is [`Failure::new`], so the
//! recorded location is the line in the test that called the check rather
//! than a line inside this crate.

use std::fmt;
use std::panic;

use crate::settings::Settings;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Source position of the check that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Location of the (tracked) caller.
    #[track_caller]
    pub fn caller() -> Self {
        let location = panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    pub message: String,
    pub location: Location,
}

impl Failure {
    /// Create a failure located at the (tracked) caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// The active test's failure sink.
///
/// Implementations must not panic in `report` unless they are explicitly
/// configured to stop at the first failure.
pub trait Reporter {
    /// Record one failure.
    fn report(&mut self, failure: Failure);
}

impl Reporter for Vec<Failure> {
    fn report(&mut self, failure: Failure) {
        self.push(failure);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, failure: Failure) {
        (**self).report(failure);
    }
}

/// Per-test failure accumulator.
///
/// Collects failures and fails the test once, at the end, with a summary of
/// all of them. Call [`finish`](Recorder::finish) explicitly, or just let the
/// recorder go out of scope.
///
/// ```should_panic
/// use verdict::{check, Recorder};
///
/// let mut t = Recorder::new();
/// check::eq(&mut t, 1 + 1, 3);
/// check::gt(&mut t, 1, 2);
/// t.finish(); // panics: "2 assertions failed"
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    settings: Settings,
    failures: Vec<Failure>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            failures: Vec::new(),
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Failures recorded so far, in order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// True if nothing has failed yet.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Take the recorded failures. The recorder is consumed without failing
    /// the test, so the caller owns the verdict.
    pub fn into_failures(mut self) -> Vec<Failure> {
        std::mem::take(&mut self.failures)
    }

    /// Human-readable summary of every recorded failure.
    pub fn summary(&self) -> String {
        render_summary(&self.failures, self.settings.color.enabled())
    }

    /// End the test: panic with the summary if anything failed.
    pub fn finish(mut self) {
        if self.failures.is_empty() {
            return;
        }
        let summary = self.summary();
        self.failures.clear();
        panic!("{summary}");
    }
}

impl Reporter for Recorder {
    fn report(&mut self, failure: Failure) {
        log::debug!("assertion failed at {}: {}", failure.location, failure.message);

        if self.settings.fail_fast {
            let summary = render_summary(std::slice::from_ref(&failure), self.settings.color.enabled());
            panic!("{summary}");
        }
        self.failures.push(failure);
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        if self.failures.is_empty() {
            return;
        }
        // A second panic during unwind would abort the whole test binary
        if std::thread::panicking() {
            log::warn!(
                "dropping {} unreported failure(s) while already panicking:\n{}",
                self.failures.len(),
                render_summary(&self.failures, false)
            );
            return;
        }
        let summary = self.summary();
        self.failures.clear();
        panic!("{summary}");
    }
}

fn render_summary(failures: &[Failure], color: bool) -> String {
    let noun = if failures.len() == 1 {
        "assertion"
    } else {
        "assertions"
    };
    let mut out = format!("{} {} failed:", failures.len(), noun);
    for failure in failures {
        out.push_str("\n  ");
        out.push_str(&failure.to_string());
    }
    if color {
        format!("{RED}{out}{RESET}")
    } else {
        out
    }
}
