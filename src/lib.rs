//! Helpers for moving scalar values in and out of `Option`, one by one or
//! across slices and string-keyed maps.
//!
//! Every supported type gets the same six functions, named after the type:
//!
//! - `<type>_ptr`: lifts a value into `Some`.
//! - `<type>_value`: lowers an `Option`, using the type's zero value for `None`.
//! - `<type>_ptr_slice` / `<type>_value_slice`: the same, element-wise over a slice.
//! - `<type>_ptr_map` / `<type>_value_map`: the same, value-wise over a string map.
//!
//! They are thin wrappers over the generic functions in [`to_optional`],
//! [`from_optional`] and friends, which work for any [`Zero`] type.

mod complex;
mod convert;
mod dynamic;
mod error;
mod optional;
mod scalar_kind;
mod zero;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

pub use crate::complex::{Complex, Complex128, Complex64};
pub use crate::convert::{
    from_optional, from_optional_map, from_optional_seq, to_optional, to_optional_map,
    to_optional_seq,
};
pub use crate::dynamic::{dynamic_to_optional, dynamic_to_optional_boxed, OptionalBox};
pub use crate::error::{CResult, ConvertError};
pub use crate::optional::{FromOptional, IntoOptional};
pub use crate::scalar_kind::ScalarKind;
pub use crate::zero::Zero;

macro_rules! catalog {
    ($($name:ident => $t:ty),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Returns `v` wrapped in `Some`."]
                #[inline]
                pub fn [<$name _ptr>](v: $t) -> Option<$t> {
                    to_optional(v)
                }

                #[doc = "Returns the value in `v`, or the zero `" $name "` when `v` is `None`."]
                #[inline]
                pub fn [<$name _value>](v: Option<$t>) -> $t {
                    from_optional(v)
                }

                #[doc = "Converts a slice of `" $name "` values into a `Vec` of options."]
                pub fn [<$name _ptr_slice>](src: &[$t]) -> Vec<Option<$t>> {
                    to_optional_seq(src)
                }

                #[doc = "Converts a slice of `" $name "` options into a `Vec` of values."]
                pub fn [<$name _value_slice>](src: &[Option<$t>]) -> Vec<$t> {
                    from_optional_seq(src)
                }

                #[doc = "Converts a string map of `" $name "` values into a string map of options."]
                pub fn [<$name _ptr_map>](src: &HashMap<String, $t>) -> HashMap<String, Option<$t>> {
                    to_optional_map(src)
                }

                #[doc = "Converts a string map of `" $name "` options into a string map of values."]
                pub fn [<$name _value_map>](src: &HashMap<String, Option<$t>>) -> HashMap<String, $t> {
                    from_optional_map(src)
                }
            )*
        }
    };
}

catalog! {
    bool => bool,
    int => isize,
    int8 => i8,
    int16 => i16,
    int32 => i32,
    int64 => i64,
    uint => usize,
    uint8 => u8,
    uint16 => u16,
    uint32 => u32,
    uint64 => u64,
    float32 => f32,
    float64 => f64,
    string => String,
    byte => u8,
    rune => char,
    time => DateTime<Utc>,
    duration => Duration,
    complex64 => Complex64,
    complex128 => Complex128,
}
