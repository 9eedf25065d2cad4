use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::complex::Complex;

/// The value an absent optional lowers to.
pub trait Zero: Sized {
    fn zero() -> Self;
}

macro_rules! impl_zero {
    ($($t:ty => $z:expr),* $(,)?) => {
        $(
            impl Zero for $t {
                #[inline]
                fn zero() -> Self {
                    $z
                }
            }
        )*
    };
}

impl_zero! {
    bool => false,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
    char => '\0',
    String => String::new(),
    Duration => Duration::zero(),
}

/// The uninitialised instant: January 1, year 1, 00:00:00 UTC. Not the Unix
/// epoch that `DateTime::<Utc>::default()` returns.
impl Zero for DateTime<Utc> {
    fn zero() -> Self {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or_default()
    }
}

impl<F: Zero> Zero for Complex<F> {
    fn zero() -> Self {
        Complex::new(F::zero(), F::zero())
    }
}
