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

//! # Arithmetic Operations
//!
//! The callable surface of the crate, in two forms.
//!
//! ## Submodules
//!
//! - `elementary`: The four free functions `add`, `subtract`, `multiply`
//!   and `divide`, generic over [`crate::num::operand::Operand`]. Division
//!   is the only fallible one, returning `Result<T, ArithmeticError>`.
//! - `try_arithmetic`: A by-value trait form of fallible division
//!   (`TryDivVal`) implemented for every primitive numeric type, for
//!   generic code that prefers method-call syntax over free functions.
//!
//! Both forms share the same semantics: a zero divisor yields
//! `ArithmeticError::DivisionByZero`, everything else succeeds.

pub mod elementary;
pub mod try_arithmetic;
