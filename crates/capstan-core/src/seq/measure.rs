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

//! # Derived Measurements
//!
//! Last element, one-past-the-end, length, and bounded skip for cursors
//! that do not support them natively. All of these walk the cursor by brute
//! force; [`crate::cursor::BoundedCursor`] and
//! [`crate::cursor::MeasuredCursor`] are the O(1) alternatives a caller
//! should prefer when the type offers them.
//!
//! All functions here diverge on never-terminating cursors; bound such a
//! source with [`crate::range::counted::Counted`] first.

use crate::cursor::{BidirectionalCursor, BoundedCursor, Cursor, ForwardCursor};

/// Returns a cursor positioned at the last reachable element.
///
/// For an already-terminated cursor, returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::Cursor;
/// use capstan_core::range::slice::SliceCursor;
/// use capstan_core::seq::measure::last;
///
/// let data = [1, 2, 3];
/// assert_eq!(last(SliceCursor::new(&data)).current(), 3);
/// ```
pub fn last<I: ForwardCursor>(mut i: I) -> I {
    let mut prev = i.clone();
    while i.has_current() {
        prev = i.clone();
        i.advance();
    }

    prev
}

/// Returns the last element's cursor in O(1) for bounded bidirectional
/// cursors.
///
/// # Preconditions
///
/// The range must be non-empty.
#[inline]
pub fn last_bounded<I>(i: &I) -> I
where
    I: BoundedCursor + BidirectionalCursor,
{
    let mut e = i.end();
    e.retreat();
    e
}

/// Advances `i` to its one-past-the-last position by brute force.
///
/// [`BoundedCursor::end`] is the O(1) path for types that have it.
pub fn end_of<I: Cursor>(mut i: I) -> I {
    while i.has_current() {
        i.advance();
    }

    i
}

/// Counts the elements of `i` by brute force.
///
/// [`crate::cursor::MeasuredCursor::remaining`] is the O(1) path for types
/// that have it.
///
/// # Examples
///
/// ```rust
/// use capstan_core::range::slice::SliceCursor;
/// use capstan_core::seq::measure::length;
///
/// let data = [1, 2, 3];
/// assert_eq!(length(SliceCursor::new(&data)), 3);
/// ```
pub fn length<I: Cursor>(mut i: I) -> usize {
    let mut n = 0;
    while i.has_current() {
        i.advance();
        n += 1;
    }

    n
}

/// Advances `i` at most `n` times, never past termination.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::Cursor;
/// use capstan_core::range::slice::SliceCursor;
/// use capstan_core::seq::measure::skip;
///
/// let data = [1, 2, 3];
/// assert_eq!(skip(SliceCursor::new(&data), 2).current(), 3);
/// assert!(!skip(SliceCursor::new(&data), 10).has_current());
/// ```
pub fn skip<I: Cursor>(mut i: I, mut n: usize) -> I {
    while n > 0 && i.has_current() {
        i.advance();
        n -= 1;
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{BoundedCursor, Cursor};
    use crate::range::counted::Counted;
    use crate::range::slice::SliceCursor;
    use crate::series::iota::Iota;

    #[test]
    fn test_last_of_empty_stays_terminated() {
        let data: [i32; 0] = [];
        let l = last(SliceCursor::new(&data));
        assert!(!l.has_current());
    }

    #[test]
    fn test_last_bounded_agrees_with_brute_force() {
        let data = [4, 5, 6];
        let c = SliceCursor::new(&data);
        assert_eq!(last_bounded(&c), last(c));
    }

    #[test]
    fn test_end_of_agrees_with_native_end() {
        let data = [1, 2];
        let c = SliceCursor::new(&data);
        assert_eq!(end_of(c), c.end());
    }

    #[test]
    fn test_length_of_counted_generator() {
        assert_eq!(length(Counted::new(Iota::new(0), 7)), 7);
    }

    #[test]
    fn test_skip_clamps_at_termination() {
        let data = [1, 2];
        let s = skip(SliceCursor::new(&data), 100);
        assert!(!s.has_current());
    }

    #[test]
    fn test_skip_zero_is_identity() {
        let data = [1, 2];
        let c = SliceCursor::new(&data);
        assert_eq!(skip(c, 0), c);
    }
}
