// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pattern and length checks on arbitrary text.
//!
//! Pattern compilation errors must surface as `AssertError`, never as a
//! panic from `Pattern::new`. A compiled pattern must report through the
//! sink exactly when it does not match.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use verdict::{check, Failure, Pattern};

#[derive(Debug, Arbitrary)]
struct PatternInput<'a> {
    pattern: &'a str,
    haystack: &'a str,
}

fuzz_target!(|input: PatternInput<'_>| {
    // Cap pattern size to keep regex compilation fast
    if input.pattern.len() > 64 {
        return;
    }

    let mut sink: Vec<Failure> = Vec::new();
    check::len(&mut sink, input.haystack, input.haystack.chars().count());
    assert!(sink.is_empty(), "length of text is its char count");

    let Ok(pattern) = Pattern::new(input.pattern) else {
        return;
    };

    check::matches_pattern(&mut sink, input.haystack, &pattern);
    assert_eq!(sink.is_empty(), pattern.is_match(input.haystack));
});
