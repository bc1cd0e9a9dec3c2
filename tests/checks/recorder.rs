//! Recorder lifecycle: summaries, finish, drop, fail-fast.

use std::panic;

use crate::common::{messages, plain_recorder};
use verdict::{check, guard, ColorMode, Recorder, Reporter, Settings};

#[test]
fn test_failures_keep_call_site() {
    let mut t = plain_recorder();
    let line = line!() + 1;
    check::is_true(&mut t, false);

    let failure = &t.failures()[0];
    assert_eq!(failure.location.file, file!());
    assert_eq!(failure.location.line, line);
    t.into_failures();
}

#[test]
fn test_summary_lists_every_failure() {
    let mut t = plain_recorder();
    check::eq(&mut t, 1, 2);
    check::lt(&mut t, 5, 1);

    let summary = t.summary();
    assert!(summary.starts_with("2 assertions failed:"));
    assert!(summary.contains("failed asserting 1 == 2 (expected)"));
    assert!(summary.contains("failed asserting 5 < 1 (threshold)"));
    assert_eq!(summary.lines().count(), 3);
    t.into_failures();
}

#[test]
fn test_colored_summary() {
    let mut t = Recorder::with_settings(Settings {
        fail_fast: false,
        color: ColorMode::Always,
    });
    check::is_false(&mut t, true);
    assert!(t.summary().starts_with("\x1b[31m"));
    t.into_failures();
}

#[test]
#[should_panic(expected = "2 assertions failed")]
fn test_finish_fails_the_test() {
    let mut t = plain_recorder();
    check::is_true(&mut t, false);
    check::is_false(&mut t, true);
    t.finish();
}

#[test]
#[should_panic(expected = "failed asserting 1 == 2 (expected)")]
fn test_drop_fails_the_test() {
    let mut t = plain_recorder();
    check::eq(&mut t, 1, 2);
}

#[test]
fn test_fail_fast_stops_at_first_failure() {
    let outcome = guard(|| {
        let mut t = Recorder::with_settings(Settings {
            fail_fast: true,
            color: ColorMode::Never,
        });
        check::eq(&mut t, "a", "b");
        check::eq(&mut t, "c", "d");
    });

    let message = outcome
        .panic_payload()
        .and_then(|payload| payload.message())
        .map(str::to_owned)
        .unwrap_or_default();
    assert!(message.starts_with("1 assertion failed:"));
    assert!(message.contains(r#""a" == "b""#));
    assert!(!message.contains(r#""c""#));
}

#[test]
fn test_unwinding_recorder_does_not_double_panic() {
    let result = panic::catch_unwind(|| {
        let mut t = plain_recorder();
        check::is_true(&mut t, false);
        panic!("body failed");
    });
    let payload = result.expect_err("body panics");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"body failed"));
}

#[test]
fn test_recorder_through_mutable_reference() {
    fn helper(t: &mut dyn Reporter) {
        check::contains(t, &[1, 2, 3], &4);
    }

    let mut t = plain_recorder();
    helper(&mut t);
    helper(&mut t);
    assert_eq!(
        messages(t.failures()),
        vec![
            "failed asserting sequence contains 4",
            "failed asserting sequence contains 4",
        ]
    );
    t.into_failures();
}
