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

//! # Capstan Core
//!
//! The cursor protocol and its always-present core: primitive ranges,
//! generator sequences, sequence algorithms, insertion adaptors, and
//! interop with standard iteration.
//!
//! A *cursor* is a small value representing a position in a sequence. Unlike
//! a begin/end iterator pair, a cursor carries its own termination test:
//! `has_current()` answers "does this handle still denote an element" without
//! a second sentinel object. Reading and advancing are only permitted while
//! that flag holds.
//!
//! ## Modules
//!
//! - `cursor`: The capability taxonomy: the `Cursor` trait family from
//!   input/output level up through forward, bidirectional, random-access,
//!   and contiguous cursors, plus the derived-capability traits
//!   (`BoundedCursor`, `MeasuredCursor`) and blanket conveniences.
//! - `range`: Primitive ranges over existing storage or other cursors:
//!   raw-pointer ranges, slice ranges, endpoint-bounded intervals,
//!   count-bounded ranges, and the non-terminating cyclic range.
//! - `series`: Self-contained generator sequences defined by a recurrence:
//!   arithmetic and geometric progressions, factorials, binomial-coefficient
//!   rows, constants, and the empty sequence.
//! - `seq`: Free-function algorithms over cursors: lexicographic comparison,
//!   equality and prefix tests, lockstep copying, and derived measurements
//!   (last element, one-past-end, length, skip).
//! - `insert`: Output cursors that append to a borrowed container, for use
//!   as the destination side of copy-style algorithms.
//! - `bridge`: Two-way interop with `std::iter::Iterator`.
//!
//! ## Purpose
//!
//! These primitives form the substrate for the combinator layer in
//! `capstan-adaptors`. Both layers speak the same protocol, so a pipeline
//! can mix primitive ranges, generators, and combinators freely.
//!
//! Refer to each module for detailed APIs and examples.

pub mod bridge;
pub mod cursor;
pub mod insert;
pub mod range;
pub mod seq;
pub mod series;
