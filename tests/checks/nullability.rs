//! Nil checks across handle kinds, including handles that wrap a null.

use std::collections::HashMap;
use std::io;
use std::ptr;
use std::rc::Rc;

use crate::common::{messages, record};
use verdict::{check, Kind, Nullable};

#[test]
fn test_absent_handles_are_nil() {
    let failures = record(|t| {
        check::nil(t, &None::<()>);
        check::nil(t, &None::<HashMap<String, u32>>);
        check::nil(t, &None::<Vec<u8>>);
        check::nil(t, &ptr::null::<u8>());
        check::nil(t, &ptr::null_mut::<u64>());
    });
    assert!(failures.is_empty(), "{failures:?}");
}

#[test]
fn test_present_values_are_not_nil() {
    let failures = record(|t| {
        check::not_nil(t, &Some(0_u8));
        check::not_nil(t, &Vec::<u8>::new());
        check::not_nil(t, &HashMap::<u8, u8>::new());
        check::not_nil(t, "");
        check::not_nil(t, &0.0_f64);
        check::not_nil(t, &Rc::new(5_i32));
    });
    assert!(failures.is_empty(), "{failures:?}");
}

#[test]
fn test_wrapper_around_null_handle_is_nil() {
    let inner: Option<*const u8> = Some(ptr::null());
    let boxed: Box<dyn Nullable> = Box::new(None::<u8>);
    let nested = Some(None::<String>);

    let failures = record(|t| {
        check::nil(t, &inner);
        check::nil(t, &boxed);
        check::nil(t, &nested);
    });
    assert!(failures.is_empty(), "{failures:?}");
}

#[test]
fn test_wrapper_around_plain_value_is_not_nil() {
    let boxed: Box<dyn Nullable> = Box::new(7_u32);
    assert!(!boxed.is_null());
    assert_eq!(boxed.kind(), Kind::Dynamic);

    let failures = record(|t| check::nil(t, &boxed));
    assert_eq!(messages(&failures), vec!["failed asserting nil (dynamic)"]);
}

#[test]
fn test_nil_messages_name_the_kind() {
    let failures = record(|t| {
        check::nil(t, &3_i32);
        check::nil(t, "text");
        check::not_nil(t, &None::<Vec<u8>>);
    });
    assert_eq!(
        messages(&failures),
        vec![
            "failed asserting nil (number)",
            "failed asserting nil (text)",
            "failed asserting not nil (handle)",
        ]
    );
}

#[derive(Debug)]
struct Config {
    retries: u32,
}

verdict::never_null!(Kind::Dynamic => Config);

#[test]
fn test_option_of_user_struct() {
    let config = Some(Config { retries: 3 });
    assert_eq!(config.as_ref().map(|c| c.retries), Some(3));

    let failures = record(|t| {
        check::nil(t, &None::<Config>);
        check::not_nil(t, &config);
        check::none(t, &None::<Config>);
        check::some(t, &config);
    });
    assert!(failures.is_empty(), "{failures:?}");

    let failures = record(|t| {
        check::nil(t, &config);
        check::not_nil(t, &None::<Config>);
    });
    assert_eq!(
        messages(&failures),
        vec!["failed asserting nil (handle)", "failed asserting not nil (handle)"]
    );
}

#[test]
fn test_option_of_foreign_type() {
    let failures = record(|t| {
        check::none(t, &None::<io::Error>);
        check::some(t, &Some(io::Error::new(io::ErrorKind::NotFound, "gone")));
        check::some(t, &None::<io::Error>);
    });
    assert_eq!(messages(&failures), vec!["failed asserting not nil (handle)"]);
}
