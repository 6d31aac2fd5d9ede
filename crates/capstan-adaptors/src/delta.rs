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

//! # Delta
//!
//! Pairwise differences of consecutive elements. The first element of the
//! source seeds "previous" at construction and does not appear in the
//! output; a source of length n yields n - 1 differences. The clamped
//! variants split a difference into its non-negative and non-positive
//! parts: elementwise, `uptick + downtick == delta`.

use capstan_core::cursor::{Cursor, ForwardCursor};
use num_traits::Zero;
use std::fmt;
use std::ops::Sub;

/// A cursor yielding `op(current, previous)` for consecutive elements of
/// the inner cursor.
///
/// Equality compares the inner cursor and the buffered previous element;
/// the operation is part of the type.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::delta::delta;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 3, 6, 10];
/// assert_eq!(delta(SliceCursor::new(&data)).values().collect::<Vec<i32>>(), [2, 3, 4]);
/// ```
pub struct Delta<D, I: Cursor> {
    d: D,
    inner: I,
    prev: Option<I::Item>,
}

impl<D, I> Clone for Delta<D, I>
where
    D: Clone,
    I: Cursor + Clone,
    I::Item: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            d: self.d.clone(),
            inner: self.inner.clone(),
            prev: self.prev.clone(),
        }
    }
}

/// Creates a [`Delta`] cursor with an explicit difference operation.
///
/// The operation receives `(current, previous)` in that order.
#[inline]
pub fn delta_by<D, I, U>(mut i: I, d: D) -> Delta<D, I>
where
    I: Cursor,
    D: Fn(I::Item, I::Item) -> U,
{
    let prev = if i.has_current() {
        let seed = i.current();
        i.advance();
        Some(seed)
    } else {
        None
    };
    Delta { d, inner: i, prev }
}

/// Creates a [`Delta`] cursor with plain subtraction: `current - previous`.
#[inline]
pub fn delta<I>(i: I) -> Delta<impl Fn(I::Item, I::Item) -> I::Item, I>
where
    I: Cursor,
    I::Item: Sub<Output = I::Item>,
{
    delta_by(i, |current, previous| current - previous)
}

/// The differences of `i` clamped to `[0, +inf)`.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::delta::uptick;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [5, 3, 8, 2];
/// assert_eq!(uptick(SliceCursor::new(&data)).values().collect::<Vec<i32>>(), [0, 5, 0]);
/// ```
#[inline]
pub fn uptick<I>(i: I) -> Delta<impl Fn(I::Item, I::Item) -> I::Item, I>
where
    I: Cursor,
    I::Item: Sub<Output = I::Item> + Zero + PartialOrd,
{
    delta_by(i, |current, previous| {
        let diff = current - previous;
        if diff < <I::Item as Zero>::zero() {
            <I::Item as Zero>::zero()
        } else {
            diff
        }
    })
}

/// The differences of `i` clamped to `(-inf, 0]`.
#[inline]
pub fn downtick<I>(i: I) -> Delta<impl Fn(I::Item, I::Item) -> I::Item, I>
where
    I: Cursor,
    I::Item: Sub<Output = I::Item> + Zero + PartialOrd,
{
    delta_by(i, |current, previous| {
        let diff = current - previous;
        if diff > <I::Item as Zero>::zero() {
            <I::Item as Zero>::zero()
        } else {
            diff
        }
    })
}

impl<D, I> fmt::Debug for Delta<D, I>
where
    I: Cursor + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delta")
            .field("inner", &self.inner)
            .field("prev", &self.prev)
            .finish()
    }
}

impl<D, I> PartialEq for Delta<D, I>
where
    I: Cursor + PartialEq,
    I::Item: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner && self.prev == other.prev
    }
}

impl<D, I, U> Cursor for Delta<D, I>
where
    I: Cursor,
    I::Item: Clone,
    D: Fn(I::Item, I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    #[inline]
    fn current(&self) -> U {
        let previous = self
            .prev
            .clone()
            .expect("called `current` on a terminated cursor");
        (self.d)(self.inner.current(), previous)
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.inner.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.prev = Some(self.inner.current());
        self.inner.advance();
    }
}

impl<D, I, U> ForwardCursor for Delta<D, I>
where
    I: ForwardCursor,
    I::Item: Clone + PartialEq,
    D: Fn(I::Item, I::Item) -> U + Clone,
{
}
