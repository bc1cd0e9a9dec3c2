//! Booleans, equality, ordering, size, membership, patterns, errors, panics.

use crate::common::{messages, record, single_message, LAMB};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use verdict::{check, guard, Failure, Pattern};

#[test]
fn test_passing_checks_record_nothing() {
    let failures = record(|t| {
        check::is_true(t, true);
        check::is_false(t, false);
        check::eq(t, 1, 1);
        check::eq(t, "foo", "foo");
        check::ne(t, 1, 2);
        check::gt(t, 20, 10);
        check::gte(t, 10, 10);
        check::lt(t, 10, 20);
        check::lte(t, 10, 10);
        check::len(t, &[1, 2, 3, 4, 5], 5);
        check::empty(t, &Vec::<String>::new());
        check::contains(t, &[1, 2, 3, 4, 5], &4);
        check::matches(t, LAMB, "^Mary");
    });
    assert!(failures.is_empty(), "unexpected: {:?}", messages(&failures));
}

#[test]
fn test_failures_accumulate_and_execution_continues() {
    let failures = record(|t| {
        check::eq(t, 1, 2);
        check::contains(t, &[1, 2, 3], &9);
        check::matches(t, LAMB, "^lamb");
        check::len(t, &[1, 2], 3);
    });
    assert_eq!(
        messages(&failures),
        vec![
            "failed asserting 1 == 2 (expected)",
            "failed asserting sequence contains 9",
            "failed asserting \"Mary had a little lamb.\" matches \"^lamb\" (pattern)",
            "failed asserting length 2 == 3 (expected)",
        ]
    );
}

#[test]
fn test_eq_on_nested_structures() {
    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        tags: Vec<&'static str>,
    }

    let failures = record(|t| {
        check::eq(t, Point { x: 1, tags: vec!["a"] }, Point { x: 1, tags: vec!["a"] });
        check::eq(t, Point { x: 1, tags: vec!["a"] }, Point { x: 1, tags: vec!["b"] });
    });
    assert!(single_message(&failures).contains(r#"tags: ["b"]"#));
}

#[test]
fn test_ordering_on_strings() {
    let failures = record(|t| {
        check::lt(t, "apple", "banana");
        check::gt(t, "apple", "banana");
    });
    assert_eq!(
        single_message(&failures),
        r#"failed asserting "apple" > "banana" (threshold)"#
    );
}

#[test]
fn test_len_on_collections() {
    let set: HashSet<u8> = [1, 2, 2, 3].into_iter().collect();
    let map: BTreeMap<&str, u8> = BTreeMap::new();

    let failures = record(|t| {
        check::len(t, &set, 3);
        check::empty(t, &map);
        check::len(t, "héllo", 5);
        check::len(t, &[0_u8; 0], 0);
    });
    assert!(failures.is_empty(), "unexpected: {:?}", messages(&failures));
}

#[test]
fn test_precompiled_pattern() {
    let pattern = Pattern::new(r"Mary.*lamb\.").expect("valid pattern");
    let failures = record(|t| {
        check::matches_pattern(t, LAMB, &pattern);
        check::matches_pattern(t, "Mary had a little goat.", &pattern);
    });
    assert_eq!(failures.len(), 1);
}

#[test]
fn test_invalid_pattern_is_fatal() {
    let outcome = guard(|| {
        let mut sink: Vec<Failure> = Vec::new();
        check::matches(&mut sink, LAMB, "[unterminated");
    });
    let message = outcome
        .panic_payload()
        .and_then(|payload| payload.message())
        .map(str::to_string);
    assert!(message.is_some_and(|m| m.starts_with("invalid pattern \"[unterminated\"")));
}

#[derive(Debug)]
struct ConfigError;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("missing key")
    }
}

impl std::error::Error for ConfigError {}

#[test]
fn test_error_message_equality() {
    let err: Box<dyn std::error::Error> = Box::new(ConfigError);
    let failures = record(|t| {
        check::error(t, Some(err.as_ref()), "missing key");
        check::error(t, Some(&ConfigError), "missing value");
    });
    assert_eq!(
        single_message(&failures),
        r#"failed asserting "missing key" == "missing value" (expected)"#
    );
}

#[test]
fn test_error_absent_does_not_crash() {
    let failures = record(|t| check::error(t, None::<&ConfigError>, "x"));
    assert_eq!(single_message(&failures), "failed asserting error is not nil");
}

#[test]
fn test_error_of_result() {
    let failures = record(|t| {
        check::error_of(t, &Err::<(), _>(ConfigError), "missing key");
        check::error_of(t, &"12".parse::<u8>(), "anything");
    });
    assert_eq!(single_message(&failures), "failed asserting error is not nil");
}

#[test]
fn test_panic_checks() {
    let failures = record(|t| {
        let outcome = guard(|| {
            let empty: Vec<u8> = Vec::new();
            empty[0]
        });
        check::panics(t, &outcome);

        let outcome = guard(|| 1 + 1);
        check::no_panic(t, &outcome);
        check::panics(t, &outcome);
    });
    assert_eq!(single_message(&failures), "failed asserting panic");
}

#[test]
fn test_guard_over_mutable_test_state() {
    let mut cache: Vec<&str> = Vec::new();
    let failures = record(|t| {
        let outcome = guard(|| {
            cache.push("warm");
            cache[5]
        });
        check::panics(t, &outcome);
    });
    assert!(failures.is_empty(), "{failures:?}");
    assert_eq!(cache, ["warm"]);
}
