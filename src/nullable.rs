// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Nullability as a closed set of value kinds.
//!
//! Rust has no universal null, so "is this nil?" is answered by the type:
//! each [`Nullable`] impl reports its [`Kind`] and whether the value is
//! absent. `None` is absent; raw pointers are absent when null; plain values
//! never are.
//!
//! The interesting case is a present wrapper around an absent handle, such as
//! `Some(ptr::null::<u8>())` or `Box<dyn Nullable>` holding `None`. The
//! wrapper is there, but what it carries is a null handle, so it counts as
//! nil. That only applies to reference-like kinds: `Some(0)` is not nil.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::{mpsc, Arc};

/// Category of a value, as far as nullability is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Kind {
    Unit,
    Bool,
    Number,
    Float32,
    Float64,
    Text,
    Sequence,
    Mapping,
    /// Optional values, raw pointers, smart pointers.
    Handle,
    Callable,
    Channel,
    /// Trait objects.
    Dynamic,
}

impl Kind {
    /// Kinds whose values are handles that may themselves be null.
    pub fn is_reference_like(self) -> bool {
        matches!(
            self,
            Kind::Sequence
                | Kind::Mapping
                | Kind::Handle
                | Kind::Callable
                | Kind::Channel
                | Kind::Dynamic
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Unit => "unit",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Float32 => "f32",
            Kind::Float64 => "f64",
            Kind::Text => "text",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Handle => "handle",
            Kind::Callable => "callable",
            Kind::Channel => "channel",
            Kind::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}

/// A value that can be asked whether it is nil.
pub trait Nullable {
    fn kind(&self) -> Kind;

    /// True if the value is absent, or is a reference-like wrapper around
    /// an absent handle.
    fn is_null(&self) -> bool;
}

/// Null if `value` is a reference-like handle that is itself null.
fn wraps_null<T: Nullable + ?Sized>(value: &T) -> bool {
    value.kind().is_reference_like() && value.is_null()
}

impl<T: Nullable> Nullable for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Handle
    }

    fn is_null(&self) -> bool {
        match self {
            None => true,
            Some(inner) => wraps_null(inner),
        }
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn kind(&self) -> Kind {
        Kind::Handle
    }

    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn kind(&self) -> Kind {
        Kind::Handle
    }

    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    fn kind(&self) -> Kind {
        Kind::Handle
    }

    fn is_null(&self) -> bool {
        false
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn kind(&self) -> Kind {
        Kind::Dynamic
    }

    fn is_null(&self) -> bool {
        wraps_null(&**self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    fn kind(&self) -> Kind {
        Kind::Handle
    }

    fn is_null(&self) -> bool {
        wraps_null(&**self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    fn kind(&self) -> Kind {
        Kind::Handle
    }

    fn is_null(&self) -> bool {
        wraps_null(&**self)
    }
}

// References are transparent: `&None::<u8>` is as nil as `None::<u8>`.
impl<T: Nullable + ?Sized> Nullable for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Implement [`Nullable`] for types whose values are never nil.
///
/// `Option<T>` is only [`Nullable`] when `T` is, so a type of your own needs
/// this before `check::nil(t, &None::<MyType>)` compiles. For an `Option` of
/// a type you cannot implement the trait for (a foreign type such as
/// `std::io::Error`), use `check::none` and `check::some` instead.
///
/// ```
/// use verdict::{check, Kind, Recorder};
///
/// #[derive(Debug)]
/// struct Config {
///     retries: u32,
/// }
///
/// verdict::never_null!(Kind::Dynamic => Config);
///
/// let mut t = Recorder::new();
/// check::nil(&mut t, &None::<Config>);
/// check::not_nil(&mut t, &Some(Config { retries: 3 }));
/// t.finish();
/// ```
#[macro_export]
macro_rules! never_null {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Nullable for $ty {
                fn kind(&self) -> $crate::Kind {
                    $kind
                }

                fn is_null(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_null!(Kind::Unit => ());
never_null!(Kind::Bool => bool);
never_null!(Kind::Number => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
never_null!(Kind::Float32 => f32);
never_null!(Kind::Float64 => f64);
never_null!(Kind::Text => char, str, String);

macro_rules! never_null_generic {
    ($kind:expr => $([$($params:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($params)*> Nullable for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }

                fn is_null(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_null_generic!(Kind::Sequence =>
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
);
never_null_generic!(Kind::Mapping =>
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
);
never_null_generic!(Kind::Channel =>
    [T] mpsc::Sender<T>,
    [T] mpsc::SyncSender<T>,
    [T] mpsc::Receiver<T>,
);
never_null_generic!(Kind::Callable =>
    [R] fn() -> R,
    [A, R] fn(A) -> R,
    [A, B, R] fn(A, B) -> R,
);
