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

//! # Lockstep Copy
//!
//! Source-to-destination copying through the output-cursor protocol. The
//! loop stops as soon as either side terminates, so copying into a shorter
//! destination is well defined, and copying an infinite source is bounded
//! by the destination (or by `n` for [`copy_n`]).

use crate::cursor::{Cursor, OutputCursor};

/// Copies elements from `src` into `dst` until either side terminates.
///
/// Returns the advanced destination cursor, positioned after the last
/// write.
///
/// # Examples
///
/// ```rust
/// use capstan_core::range::slice::{SliceCursor, SliceCursorMut};
/// use capstan_core::seq::copy::copy;
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 5];
/// copy(SliceCursor::new(&src), SliceCursorMut::new(&mut dst));
/// assert_eq!(dst, [1, 2, 3, 0, 0]);
/// ```
pub fn copy<I, O>(mut src: I, mut dst: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
{
    while src.has_current() && dst.has_space() {
        dst.put(src.current());
        src.advance();
    }

    dst
}

/// Copies at most `n` elements from `src` into `dst`.
///
/// Stops after `n` writes or when either side terminates, whichever comes
/// first, and returns the advanced destination cursor.
///
/// # Examples
///
/// ```rust
/// use capstan_core::insert::back_inserter;
/// use capstan_core::seq::copy::copy_n;
/// use capstan_core::series::iota::Iota;
///
/// let mut out: Vec<i32> = Vec::new();
/// copy_n(Iota::new(10), back_inserter(&mut out), 3);
/// assert_eq!(out, [10, 11, 12]);
/// ```
pub fn copy_n<I, O>(mut src: I, mut dst: O, mut n: usize) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
{
    while n > 0 && src.has_current() && dst.has_space() {
        dst.put(src.current());
        src.advance();
        n -= 1;
    }

    dst
}
