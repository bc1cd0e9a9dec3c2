// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recorder settings.

/// When to wrap the failure summary in ANSI color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no answer for the current process.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => atty::is(atty::Stream::Stderr),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// How a [`Recorder`](crate::Recorder) behaves.
///
/// ```
/// use verdict::{ColorMode, Recorder, Settings};
///
/// let recorder = Recorder::with_settings(Settings {
///     fail_fast: true,
///     color: ColorMode::Never,
/// });
/// assert!(recorder.is_clean());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Panic on the first failure instead of accumulating.
    pub fail_fast: bool,
    /// Summary coloring.
    pub color: ColorMode,
}
