// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recorder helpers shared by the unit tests and `tests/common`.
//!
//! Always compiled, hidden from documentation.

#![doc(hidden)]

use crate::report::{Failure, Recorder};
use crate::settings::{ColorMode, Settings};

/// A recorder with plain (uncolored) output, for asserting on summaries.
pub fn plain_recorder() -> Recorder {
    Recorder::with_settings(Settings {
        fail_fast: false,
        color: ColorMode::Never,
    })
}

/// Messages of the given failures, in order.
pub fn messages(failures: &[Failure]) -> Vec<&str> {
    failures.iter().map(|f| f.message.as_str()).collect()
}

/// Run `body` against a fresh recorder and hand back what it recorded,
/// without failing the surrounding test.
pub fn record<F>(body: F) -> Vec<Failure>
where
    F: FnOnce(&mut Recorder),
{
    let mut recorder = plain_recorder();
    body(&mut recorder);
    recorder.into_failures()
}
