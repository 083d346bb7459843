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

//! # Abacus Core
//!
//! Elementary arithmetic primitives for generic numeric code. This crate
//! provides the four basic operations (addition, subtraction, multiplication,
//! division) as pure, stateless functions over a unified operand bound, with
//! exactly one guarded failure mode: division by zero.
//!
//! ## Modules
//!
//! - `error`: The single error kind, [`error::ArithmeticError`], whose
//!   `DivisionByZero` variant carries the fixed message
//!   `"Cannot divide by zero"`.
//! - `num`: The [`num::operand::Operand`] trait alias collecting the numeric
//!   bounds (via `num_traits`) shared by every operation, so integers and
//!   floating-point types are handled uniformly.
//! - `ops`: The four-function interface (`ops::elementary`) and a by-value
//!   trait form of fallible division (`ops::try_arithmetic`).
//!
//! ## Purpose
//!
//! Every operation is free of shared state and suspension points, so calls
//! are independent and trivially safe to issue from multiple threads. The
//! only non-total operation is division, which reports a zero divisor as a
//! `Result` instead of panicking or producing an infinity.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod num;
pub mod ops;
