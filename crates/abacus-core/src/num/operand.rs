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

//! # Operand Trait
//!
//! Unified numeric bounds for the arithmetic operations. `Operand` collects
//! the capabilities every operation in this crate relies on: the `num_traits`
//! arithmetic fundamentals (`Num`, which implies `Zero`, `One`, `PartialEq`
//! and the binary operators), by-value copy semantics, ordering, and the
//! formatting traits used in diagnostics.
//!
//! ## Motivation
//!
//! The four elementary operations should remain generic over numeric types
//! while keeping their signatures readable. Collecting the bounds into a
//! single alias avoids repeating a where-clause per function and guarantees
//! that every operand type offers a uniform zero test for the division
//! guard.
//!
//! All primitive integer and floating-point types satisfy the alias.

use num_traits::Num;

/// A trait alias for numeric types usable with the elementary operations.
///
/// This covers all primitive integers (`i8` through `i128`, unsigned
/// included) and the floating-point types `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::operand::Operand;
/// fn double<T: Operand>(x: T) -> T {
///     x + x
/// }
/// assert_eq!(double(21), 42);
/// assert_eq!(double(1.5f64), 3.0);
/// ```
pub trait Operand: Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display {}

impl<T> Operand for T where T: Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display {}
