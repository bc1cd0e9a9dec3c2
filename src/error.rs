// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Misuse errors.
//!
//! These are not assertion failures. A failed check is reported and the test
//! continues; an `AssertError` means the check itself could not be built.

use std::fmt;

/// Error type for checks that cannot be constructed.
#[derive(Debug, Clone)]
pub enum AssertError {
    /// The pattern given to a match check does not compile.
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for AssertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertError::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern {:?}: {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for AssertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssertError::InvalidPattern { source, .. } => Some(source),
        }
    }
}
