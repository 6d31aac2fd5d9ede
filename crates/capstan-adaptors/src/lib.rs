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

//! # Capstan Adaptors
//!
//! The combinator layer of the capstan cursor ecosystem. Every adaptor
//! wraps one or more inner cursors by value and recomputes the three
//! protocol operations (termination test, read, advance) in terms of
//! them, so combinators compose freely with the primitive ranges and
//! generators of `capstan-core`.
//!
//! ## Modules
//!
//! - `apply`: Transform each element through a pure function.
//! - `filter`: Keep only elements satisfying a predicate.
//! - `until`: Cut the sequence at the first element satisfying a predicate.
//! - `fold`: The sequence of partial reduction results.
//! - `concat`: Ordered concatenation, two-way and n-ary (`concatenate!`).
//! - `merge`: Stable sorted merge, two-way and n-ary (`merge!`).
//! - `delta`: Pairwise differences, with clamped `uptick`/`downtick`
//!   variants.
//!
//! ## Conventions
//!
//! Two rules hold across the layer:
//!
//! - Every constructor establishes its adaptor's full invariant before
//!   returning; `filter` pre-skips failing elements and `delta` consumes
//!   its seed element at construction, never lazily on first access.
//! - Captured callables are part of the adaptor's type, not of its runtime
//!   state: equality compares positional state (inner cursors,
//!   accumulators, preference flags) and nothing else.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_adaptors::apply::apply;
//! use capstan_adaptors::filter::filter;
//! use capstan_core::cursor::CursorExt;
//! use capstan_core::range::slice::SliceCursor;
//!
//! let data = [1, 2, 3, 4];
//! let squares_of_even = filter(|x: &i32| x % 2 == 0, apply(|x: i32| x * x, SliceCursor::new(&data)));
//! assert_eq!(squares_of_even.values().collect::<Vec<i32>>(), [4, 16]);
//! ```

pub mod apply;
pub mod concat;
pub mod delta;
pub mod filter;
pub mod fold;
pub mod merge;
pub mod until;
