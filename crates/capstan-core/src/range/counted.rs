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

//! # Count-Bounded Range
//!
//! `Counted<I>` bounds any cursor to at most `n` further elements. The
//! termination flag is the conjunction "count not exhausted AND the inner
//! cursor still has data": the inner cursor running dry before the count
//! reaches zero is not an error, it simply terminates the view early. This
//! is the standard way to bound an unbounded source such as a raw pointer
//! walk, a generator, or a cyclic range.

use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, MeasuredCursor, RandomAccessCursor,
};

/// A view of at most `n` elements of an inner cursor.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::counted::Counted;
/// use capstan_core::series::iota::Iota;
///
/// let firsts: Vec<i32> = Counted::new(Iota::new(0), 4).values().collect();
/// assert_eq!(firsts, [0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counted<I> {
    inner: I,
    n: usize,
}

impl<I> Counted<I> {
    /// Creates a view of at most `n` elements of `inner`.
    #[inline]
    pub fn new(inner: I, n: usize) -> Self {
        Self { inner, n }
    }

    /// Returns the count budget left, ignoring the inner cursor's state.
    ///
    /// [`MeasuredCursor::remaining`] is the exact measure where available.
    #[inline]
    pub fn budget(&self) -> usize {
        self.n
    }
}

/// Takes at most `n` elements from the front of `i`.
///
/// When the inner cursor can report its size without being consumed
/// (it implements [`MeasuredCursor`]), the stored count is clamped so that
/// the view's own measure is exact from birth. [`Counted::new`] is the raw
/// alternative for cursors that cannot be measured; its traversal is
/// identical because termination also tracks the inner cursor.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::MeasuredCursor;
/// use capstan_core::range::counted::take;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3];
/// let t = take(SliceCursor::new(&data), 10);
/// assert_eq!(t.remaining(), 3);
/// ```
#[inline]
pub fn take<I>(i: I, n: usize) -> Counted<I>
where
    I: MeasuredCursor,
{
    let clamped = n.min(i.remaining());
    Counted::new(i, clamped)
}

impl<I: Cursor> Cursor for Counted<I> {
    type Item = I::Item;

    #[inline]
    fn has_current(&self) -> bool {
        self.n != 0 && self.inner.has_current()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        debug_assert!(self.n != 0, "called `current` on a terminated cursor");
        self.inner.current()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.inner.advance();
        self.n -= 1;
    }
}

impl<I: ForwardCursor> ForwardCursor for Counted<I> {}

impl<I: BidirectionalCursor> BidirectionalCursor for Counted<I> {
    #[inline]
    fn retreat(&mut self) {
        self.inner.retreat();
        self.n += 1;
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for Counted<I> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        self.inner.seek(offset);
        self.n = (self.n as isize - offset) as usize;
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(&other.inner)
    }

    #[inline]
    fn peek_at(&self, offset: isize) -> Self::Item {
        self.inner.peek_at(offset)
    }
}

impl<I: MeasuredCursor> MeasuredCursor for Counted<I> {
    #[inline]
    fn remaining(&self) -> usize {
        self.n.min(self.inner.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, CursorExt, MeasuredCursor};
    use crate::range::slice::SliceCursor;
    use crate::series::iota::Iota;

    #[test]
    fn test_exactly_n_advances_on_a_longer_source() {
        let mut c = Counted::new(Iota::new(0), 3);
        let mut advances = 0;
        while c.has_current() {
            c.advance();
            advances += 1;
        }
        assert_eq!(advances, 3);
        assert!(!c.has_current());
    }

    #[test]
    fn test_inner_exhaustion_terminates_before_count() {
        let data = [1, 2];
        let mut c = Counted::new(SliceCursor::new(&data), 5);
        let mut advances = 0;
        while c.has_current() {
            c.advance();
            advances += 1;
        }
        assert_eq!(advances, 2);
    }

    #[test]
    fn test_zero_count_is_terminated_from_birth() {
        let c = Counted::new(Iota::new(0), 0);
        assert!(!c.has_current());
    }

    #[test]
    fn test_take_clamps_to_measured_size() {
        let data = [1, 2, 3];
        let t = take(SliceCursor::new(&data), 100);
        assert_eq!(t.budget(), 3);
        assert_eq!(t.remaining(), 3);
    }

    #[test]
    fn test_take_keeps_smaller_request() {
        let data = [1, 2, 3, 4, 5];
        let t = take(SliceCursor::new(&data), 2);
        assert_eq!(t.values().collect::<Vec<i32>>(), [1, 2]);
    }

    #[test]
    fn test_remaining_tracks_both_bounds() {
        let data = [1, 2, 3];
        let mut c = Counted::new(SliceCursor::new(&data), 10);
        assert_eq!(c.remaining(), 3);
        c.advance();
        assert_eq!(c.remaining(), 2);

        let c = Counted::new(SliceCursor::new(&data), 2);
        assert_eq!(c.remaining(), 2);
    }

    #[test]
    fn test_random_access_seek_restores_budget() {
        use crate::cursor::RandomAccessCursor;
        let data = [1, 2, 3, 4];
        let mut c = Counted::new(SliceCursor::new(&data), 4);
        c.seek(2);
        assert_eq!(c.current(), 3);
        assert_eq!(c.budget(), 2);
        c.seek(-2);
        assert_eq!(c.current(), 1);
        assert_eq!(c.budget(), 4);
    }
}
