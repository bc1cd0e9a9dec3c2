// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for verdict.
//!
//! One attribute, `#[verdict::test]`. It saves the three lines every test
//! would otherwise start and end with: create a `Recorder`, hand it to the
//! body, finish it so accumulated failures fail the test.
//!
//! # Example
//!
//! ```ignore
//! use verdict::{check, Recorder};
//!
//! #[verdict::test]
//! fn parses_numbers(t: &mut Recorder) {
//!     check::eq(t, "42".parse::<u8>().ok(), Some(42));
//!     check::error_of(t, &"x".parse::<u8>(), "invalid digit found in string");
//! }
//!
//! // Stop at the first failed check instead of collecting them
//! #[verdict::test(fail_fast)]
//! fn strict(t: &mut Recorder) {
//!     check::is_true(t, true);
//! }
//! ```

use proc_macro::TokenStream;

mod test_attr;

/// Turn `fn name(t: &mut Recorder) { ... }` into a `#[test]` that owns a
/// recorder and fails if any check in the body failed.
///
/// # Attributes
///
/// - `fail_fast` or `fail_fast = true` - panic on the first failed check
///
/// The function must take exactly one parameter bound to a plain identifier,
/// must not be generic or async, and must not return a value. Other
/// attributes on the function (`#[should_panic]`, `#[ignore]`) are kept.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    test_attr::process(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
