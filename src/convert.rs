//! The six conversion shapes, written once and shared by every scalar type.

use std::collections::HashMap;

use itertools::Itertools;

use crate::optional::FromOptional;
use crate::zero::Zero;

#[inline]
pub fn to_optional<T>(v: T) -> Option<T> {
    Some(v)
}

#[inline]
pub fn from_optional<T: Zero>(v: Option<T>) -> T {
    v.value_or_zero()
}

/// Lifts every element of `src`; the result has the same length and order.
pub fn to_optional_seq<T: Clone>(src: &[T]) -> Vec<Option<T>> {
    src.iter().cloned().map(Some).collect_vec()
}

/// Lowers every element of `src`, putting the zero value where an element is
/// absent.
pub fn from_optional_seq<T: Zero + Clone>(src: &[Option<T>]) -> Vec<T> {
    src.iter().cloned().map(from_optional).collect_vec()
}

pub fn to_optional_map<T: Clone>(src: &HashMap<String, T>) -> HashMap<String, Option<T>> {
    src.iter()
        .map(|(k, v)| (k.clone(), Some(v.clone())))
        .collect()
}

/// Lowers every value of `src`. Absent values become the zero value and keep
/// their key.
pub fn from_optional_map<T: Zero + Clone>(src: &HashMap<String, Option<T>>) -> HashMap<String, T> {
    src.iter()
        .map(|(k, v)| (k.clone(), from_optional(v.clone())))
        .collect()
}
