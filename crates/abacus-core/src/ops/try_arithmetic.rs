// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::error::ArithmeticError;
use core::ops::Div;

/// A trait for types that support fallible division by value (no references).
///
/// This mirrors the semantics of [`crate::ops::elementary::divide`], but
/// provides a trait-based method-call API: a zero divisor yields
/// [`ArithmeticError::DivisionByZero`], any other divisor succeeds. Unlike
/// the `checked_div` intrinsics, the guard covers the floating-point types
/// as well, where plain division would produce an infinity or NaN.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{error::ArithmeticError, ops::try_arithmetic::TryDivVal};
/// let a: u8 = 100;
/// assert_eq!(a.try_div_val(4), Ok(25));
/// assert_eq!(a.try_div_val(0), Err(ArithmeticError::DivisionByZero));
///
/// let x: f64 = 1.0;
/// assert_eq!(x.try_div_val(0.0), Err(ArithmeticError::DivisionByZero));
/// ```
pub trait TryDivVal: Sized + Div<Self, Output = Self> {
    /// Performs division by value, returning `Err(DivisionByZero)` if the
    /// divisor is zero.
    fn try_div_val(self, v: Self) -> Result<Self, ArithmeticError>;
}

macro_rules! try_div_impl_val {
    ($t:ty, $zero:expr) => {
        impl TryDivVal for $t {
            #[inline(always)]
            fn try_div_val(self, v: $t) -> Result<$t, ArithmeticError> {
                if v == $zero {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(self / v)
            }
        }
    };
}

try_div_impl_val!(u8, 0);
try_div_impl_val!(u16, 0);
try_div_impl_val!(u32, 0);
try_div_impl_val!(u64, 0);
try_div_impl_val!(usize, 0);
try_div_impl_val!(u128, 0);

try_div_impl_val!(i8, 0);
try_div_impl_val!(i16, 0);
try_div_impl_val!(i32, 0);
try_div_impl_val!(i64, 0);
try_div_impl_val!(isize, 0);
try_div_impl_val!(i128, 0);

try_div_impl_val!(f32, 0.0);
try_div_impl_val!(f64, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_div_val_integers() {
        assert_eq!(10i32.try_div_val(2), Ok(5));
        assert_eq!(9u64.try_div_val(3), Ok(3));
        assert_eq!(7i8.try_div_val(2), Ok(3)); // Truncating, per integer semantics
    }

    #[test]
    fn test_try_div_val_floats() {
        assert_eq!(10.0f64.try_div_val(2.0), Ok(5.0));
        assert_eq!(1.0f32.try_div_val(4.0), Ok(0.25));
    }

    #[test]
    fn test_try_div_val_zero_divisor() {
        assert_eq!(10i32.try_div_val(0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(0u8.try_div_val(0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            10.0f64.try_div_val(0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_try_div_val_matches_free_function() {
        use crate::ops::elementary::divide;
        for (a, b) in [(10i64, 2i64), (9, 3), (-20, 4), (5, 0)] {
            assert_eq!(a.try_div_val(b), divide(a, b));
        }
    }
}
