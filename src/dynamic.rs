//! Lifting values whose concrete type is only known at run time.

use std::any::{type_name, Any};

use chrono::{DateTime, Duration, Utc};

use crate::complex::{Complex128, Complex64};
use crate::error::{CResult, ConvertError};
use crate::scalar_kind::ScalarKind;

macro_rules! optional_box {
    ($($variant:ident => $t:ty),* $(,)?) => {
        /// An optional whose element type is one of the [`ScalarKind`]s,
        /// chosen at run time.
        #[derive(Debug, Clone, PartialEq)]
        pub enum OptionalBox {
            $($variant(Option<$t>),)*
        }

        impl OptionalBox {
            /// An absent box of the given kind.
            pub fn absent(kind: ScalarKind) -> Self {
                match kind {
                    $(ScalarKind::$variant => OptionalBox::$variant(None),)*
                }
            }

            pub fn kind(&self) -> ScalarKind {
                match self {
                    $(OptionalBox::$variant(_) => ScalarKind::$variant,)*
                }
            }

            pub fn is_present(&self) -> bool {
                match self {
                    $(OptionalBox::$variant(v) => v.is_some(),)*
                }
            }

            /// Erases the kind, leaving a `Box<dyn Any>` that holds the
            /// `Option<T>` of the matching type.
            pub fn into_any(self) -> Box<dyn Any> {
                match self {
                    $(OptionalBox::$variant(v) => Box::new(v),)*
                }
            }
        }

        $(
            impl From<Option<$t>> for OptionalBox {
                fn from(v: Option<$t>) -> Self {
                    OptionalBox::$variant(v)
                }
            }
        )*

        // One downcast per kind; the first exact type match wins.
        fn box_any(value: Box<dyn Any>) -> Result<OptionalBox, Box<dyn Any>> {
            $(
                let value = match value.downcast::<$t>() {
                    Ok(v) => return Ok(OptionalBox::$variant(Some(*v))),
                    Err(v) => v,
                };
            )*
            Err(value)
        }
    };
}

optional_box! {
    Bool => bool,
    Int => isize,
    Int8 => i8,
    Int16 => i16,
    Int32 => i32,
    Int64 => i64,
    Uint => usize,
    Uint8 => u8,
    Uint16 => u16,
    Uint32 => u32,
    Uint64 => u64,
    Float32 => f32,
    Float64 => f64,
    String => String,
    Rune => char,
    Time => DateTime<Utc>,
    Duration => Duration,
    Complex64 => Complex64,
    Complex128 => Complex128,
}

impl OptionalBox {
    /// Recovers the typed optional. Returns `None` when `T` is not the
    /// box's element type.
    pub fn downcast<T: Any>(self) -> Option<Option<T>> {
        self.into_any().downcast::<Option<T>>().ok().map(|v| *v)
    }
}

/// Wraps `value` in a present [`OptionalBox`] of exactly its own type.
///
/// Fails with [`ConvertError::TypeConstruction`] when `T` is not one of the
/// supported scalar types. No conversion is attempted, so `&str` or `i128`
/// are rejected rather than widened.
pub fn dynamic_to_optional<T: Any>(value: T) -> CResult<OptionalBox> {
    box_any(Box::new(value)).map_err(|_| type_construction(type_name::<T>().to_string()))
}

/// Like [`dynamic_to_optional`], for values that are already type-erased.
pub fn dynamic_to_optional_boxed(value: Box<dyn Any>) -> CResult<OptionalBox> {
    box_any(value).map_err(|v| type_construction(format!("{:?}", (*v).type_id())))
}

fn type_construction(type_name: String) -> ConvertError {
    tracing::debug!(type_name = %type_name, "no optional box for type");
    ConvertError::TypeConstruction { type_name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;

    #[test]
    fn box_matches_runtime_type() -> CResult<()> {
        assert_eq!(OptionalBox::Bool(Some(true)), dynamic_to_optional(true)?);
        assert_eq!(OptionalBox::Uint8(Some(8)), dynamic_to_optional(8u8)?);
        assert_eq!(OptionalBox::Int32(Some(32)), dynamic_to_optional(32i32)?);
        assert_eq!(OptionalBox::Int(Some(1)), dynamic_to_optional(1isize)?);
        assert_eq!(OptionalBox::Rune(Some('r')), dynamic_to_optional('r')?);
        assert_eq!(
            OptionalBox::String(Some("ptr".to_string())),
            dynamic_to_optional("ptr".to_string())?
        );
        assert_eq!(
            OptionalBox::Complex64(Some(Complex::new(1.1, 0.0))),
            dynamic_to_optional(Complex64::new(1.1, 0.0))?
        );
        Ok(())
    }

    #[test]
    fn no_widening() -> CResult<()> {
        let b = dynamic_to_optional(7u16)?;
        assert_eq!(ScalarKind::Uint16, b.kind());
        assert_eq!(None, b.clone().downcast::<u32>());
        assert_eq!(Some(Some(7u16)), b.downcast::<u16>());
        Ok(())
    }

    #[test]
    fn unsupported_type_fails() {
        let err = dynamic_to_optional("borrowed").unwrap_err();
        assert_eq!(
            ConvertError::TypeConstruction {
                type_name: "&str".to_string()
            },
            err
        );
        assert!(dynamic_to_optional(1i128).is_err());
        assert!(dynamic_to_optional(vec![1u8]).is_err());
    }

    #[test]
    fn boxed_input() -> CResult<()> {
        let erased: Box<dyn Any> = Box::new(Duration::seconds(5));
        let b = dynamic_to_optional_boxed(erased)?;
        assert_eq!(ScalarKind::Duration, b.kind());
        assert!(b.is_present());
        assert_eq!(Some(Some(Duration::seconds(5))), b.downcast::<Duration>());

        let erased: Box<dyn Any> = Box::new(());
        assert!(matches!(
            dynamic_to_optional_boxed(erased),
            Err(ConvertError::TypeConstruction { .. })
        ));
        Ok(())
    }

    #[test]
    fn absent_boxes() {
        for kind in ScalarKind::ALL {
            let b = OptionalBox::absent(kind);
            assert_eq!(kind, b.kind());
            assert!(!b.is_present());
        }
    }

    #[test]
    fn into_any_holds_option() {
        let any = OptionalBox::from(Some(2.5f64)).into_any();
        assert_eq!(Some(&Some(2.5f64)), any.downcast_ref::<Option<f64>>());
    }
}
