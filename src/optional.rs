use crate::zero::Zero;

/// Lifts a value into an `Option`, or passes an `Option` through untouched.
pub trait IntoOptional<T> {
    fn into_optional(self) -> Option<T>;
}

impl<T> IntoOptional<T> for T {
    fn into_optional(self) -> Option<T> {
        Some(self)
    }
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Option<T> {
        self
    }
}

impl IntoOptional<String> for &str {
    fn into_optional(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptional<String> for Option<&str> {
    fn into_optional(self) -> Option<String> {
        self.map(|s| s.to_string())
    }
}

/// Lowers an `Option` to its value, falling back to the type's zero value.
pub trait FromOptional<T> {
    fn value_or_zero(self) -> T;
}

impl<T: Zero> FromOptional<T> for Option<T> {
    #[inline]
    fn value_or_zero(self) -> T {
        self.unwrap_or_else(T::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn takes_limit(limit: impl IntoOptional<u64>) -> Option<u64> {
        limit.into_optional()
    }

    fn takes_name(name: impl IntoOptional<String>) -> Option<String> {
        name.into_optional()
    }

    #[test]
    fn value_or_optional_accepted() {
        assert_eq!(Some(10), takes_limit(10));
        assert_eq!(Some(10), takes_limit(Some(10)));
        assert_eq!(None, takes_limit(None));
    }

    #[test]
    fn str_lifts_to_owned() {
        assert_eq!(Some("a".to_string()), takes_name("a"));
        assert_eq!(Some("b".to_string()), takes_name(Some("b")));
        assert_eq!(None, takes_name(None::<&str>));
    }

    #[test]
    fn lower_present_and_absent() {
        assert_eq!(7i32, Some(7i32).value_or_zero());
        assert_eq!(0i32, None::<i32>.value_or_zero());

        assert_eq!("kept", Some("kept".to_string()).value_or_zero());
        assert_eq!("", None::<String>.value_or_zero());
    }
}
