// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precompiled patterns for `check::matches_pattern`.

use regex::Regex;

use crate::error::AssertError;

/// A compiled regular expression.
///
/// Compile once with [`Pattern::new`] when the same pattern is checked
/// against many strings; `check::matches` compiles on every call.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, AssertError> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|source| AssertError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// True if the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}
