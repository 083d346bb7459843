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

//! The four elementary operations as pure free functions.
//!
//! Addition, subtraction and multiplication are total over their operand
//! type and return plain values. Division guards against a zero divisor and
//! returns a `Result`; the quotient otherwise follows the operand type's own
//! division semantics (true division for floats, truncating for integers).
//!
//! Every function is stateless and free of side effects, so calls are
//! independent and safe to issue concurrently without locking.

use crate::{error::ArithmeticError, num::operand::Operand};
use num_traits::Zero;

/// Returns the sum `a + b`.
///
/// Total over the operand type; commutative and associative.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::ops::elementary::add;
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(-2, -3), -5);
/// assert_eq!(add(0.5, 0.25), 0.75);
/// ```
#[inline]
pub fn add<T: Operand>(a: T, b: T) -> T {
    a + b
}

/// Returns the difference `a - b`.
///
/// Total over the operand type.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::ops::elementary::subtract;
/// assert_eq!(subtract(5, 3), 2);
/// assert_eq!(subtract(0, 5), -5);
/// ```
#[inline]
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    a - b
}

/// Returns the product `a * b`.
///
/// Total over the operand type; commutative and associative.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::ops::elementary::multiply;
/// assert_eq!(multiply(3, 4), 12);
/// assert_eq!(multiply(-2, 3), -6);
/// ```
#[inline]
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    a * b
}

/// Returns the quotient `a / b`, or [`ArithmeticError::DivisionByZero`]
/// when `b` is zero.
///
/// The zero guard applies to floats as well, which would otherwise yield an
/// infinity or NaN instead of an error. A nonzero divisor always succeeds.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{error::ArithmeticError, ops::elementary::divide};
/// assert_eq!(divide(10.0, 2.0), Ok(5.0));
/// assert_eq!(divide(9, 3), Ok(3));
/// assert_eq!(divide(10, 0), Err(ArithmeticError::DivisionByZero));
/// ```
#[inline]
pub fn divide<T: Operand>(a: T, b: T) -> Result<T, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}
