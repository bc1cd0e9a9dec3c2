// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Containers that know how many elements they hold.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Anything `check::len` and `check::empty` can measure.
pub trait Length {
    fn length(&self) -> usize;
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Character count, not bytes.
impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

macro_rules! length_via_len {
    ($([$($params:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($params)*> Length for $ty {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

length_via_len!(
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
);
