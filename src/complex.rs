#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complex number as a plain real/imaginary pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex<F> {
    pub re: F,
    pub im: F,
}

pub type Complex64 = Complex<f32>;
pub type Complex128 = Complex<f64>;

impl<F> Complex<F> {
    pub const fn new(re: F, im: F) -> Self {
        Self { re, im }
    }
}

impl<F> From<(F, F)> for Complex<F> {
    fn from((re, im): (F, F)) -> Self {
        Self::new(re, im)
    }
}
