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

//! # Generator Sequences
//!
//! Self-contained cursors defined by a recurrence rather than by backing
//! storage. Each holds its full state by value, so clones branch the
//! sequence independently.
//!
//! ## Submodules
//!
//! - `iota`: Arithmetic progression: `t, t + 1, t + 2, ...`.
//! - `powers`: Geometric progression: `a, a * r, a * r^2, ...`.
//! - `factorials`: `1, 1, 2, 6, 24, ...`.
//! - `binomial`: One row of Pascal's triangle, `C(n, 0) ..= C(n, n)`; the
//!   one generator with a natural finite bound.
//! - `constant`: The same value forever, and `once` for a single element.
//! - `empty`: The sequence with no elements.
//!
//! ## Motivation
//!
//! Generators give the combinator layer unbounded, cheap sources. Numeric
//! bounds come from `num_traits`, so the progressions work over any numeric
//! type with the required operations.

pub mod binomial;
pub mod constant;
pub mod empty;
pub mod factorials;
pub mod iota;
pub mod powers;
