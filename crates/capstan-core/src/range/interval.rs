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

//! # Endpoint-Bounded Range
//!
//! `Interval<I>` turns any cursor plus a fixed end position of the same
//! type into a bounded range: the termination flag is `current != end`.
//! This is how an unbounded source (a raw pointer walk, an arithmetic
//! progression) acquires an endpoint, and it inherits whatever capability
//! level its inner cursor has.

use crate::cursor::{
    BidirectionalCursor, BoundedCursor, Cursor, ForwardCursor, MeasuredCursor, RandomAccessCursor,
};

/// A range bounded by an end position of the same cursor type.
///
/// # Preconditions
///
/// The end position must be reachable from the current position by
/// repeated advances; otherwise the range never terminates.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::{Cursor, CursorExt};
/// use capstan_core::range::interval::Interval;
/// use capstan_core::series::iota::Iota;
///
/// // The naturals from 3, cut at 6.
/// let c = Interval::new(Iota::new(3), Iota::new(6));
/// assert_eq!(c.values().collect::<Vec<i32>>(), [3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<I> {
    cur: I,
    end: I,
}

impl<I> Interval<I> {
    /// Creates a range over `[cur, end)`.
    #[inline]
    pub fn new(cur: I, end: I) -> Self {
        Self { cur, end }
    }
}

impl<I: Clone> Interval<I> {
    /// Returns the range positioned at its own start.
    #[inline]
    pub fn begin(&self) -> Self {
        self.clone()
    }
}

/// Closes any bounded cursor into interval form.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::interval::interval_over;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3];
/// let c = interval_over(SliceCursor::new(&data));
/// assert_eq!(c.values().collect::<Vec<i32>>(), [1, 2, 3]);
/// ```
#[inline]
pub fn interval_over<I>(i: I) -> Interval<I>
where
    I: BoundedCursor + Clone,
{
    let end = i.end();
    Interval::new(i, end)
}

impl<I> Cursor for Interval<I>
where
    I: Cursor + PartialEq,
{
    type Item = I::Item;

    #[inline]
    fn has_current(&self) -> bool {
        self.cur != self.end
    }

    #[inline]
    fn current(&self) -> Self::Item {
        debug_assert!(
            self.has_current(),
            "called `current` on a terminated cursor"
        );
        self.cur.current()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.cur.advance();
    }
}

impl<I> ForwardCursor for Interval<I> where I: ForwardCursor {}

impl<I> BidirectionalCursor for Interval<I>
where
    I: BidirectionalCursor,
{
    #[inline]
    fn retreat(&mut self) {
        self.cur.retreat();
    }
}

impl<I> RandomAccessCursor for Interval<I>
where
    I: RandomAccessCursor,
{
    #[inline]
    fn seek(&mut self, offset: isize) {
        self.cur.seek(offset);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.cur.distance_to(&other.cur)
    }

    #[inline]
    fn peek_at(&self, offset: isize) -> Self::Item {
        self.cur.peek_at(offset)
    }
}

impl<I> BoundedCursor for Interval<I>
where
    I: Cursor + PartialEq + Clone,
{
    #[inline]
    fn end(&self) -> Self {
        Self {
            cur: self.end.clone(),
            end: self.end.clone(),
        }
    }
}

impl<I> MeasuredCursor for Interval<I>
where
    I: RandomAccessCursor,
{
    #[inline]
    fn remaining(&self) -> usize {
        let d = self.cur.distance_to(&self.end);
        debug_assert!(d >= 0, "interval end precedes its current position");
        d as usize
    }
}
