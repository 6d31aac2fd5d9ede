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

//! # Fold
//!
//! The sequence of partial reduction results. The current element is the
//! accumulator *before* consuming the next inner element; advancing
//! combines the two and moves the inner cursor. For an inner sequence of
//! length n, the fold also has length n; the fully reduced value is never
//! yielded, it is what the accumulator holds after termination.
//!
//! Reducing to a single scalar is a consumer concern, available through the
//! std bridge (`values().sum()` and friends), not an adaptor.

use capstan_core::cursor::{Cursor, ForwardCursor};
use num_traits::Zero;
use std::fmt;

/// A cursor yielding the running accumulator of a binary operation.
///
/// The operation receives the accumulator by reference and the inner
/// element by value; it need not be associative. Equality compares the
/// inner cursor and the accumulator; the operation is part of the type.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::fold::fold;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3];
/// let sums = fold(|acc: &i32, x: i32| acc + x, SliceCursor::new(&data), 0);
/// assert_eq!(sums.values().collect::<Vec<i32>>(), [0, 1, 3]);
/// ```
#[derive(Clone)]
pub struct Fold<Op, I, T> {
    op: Op,
    inner: I,
    acc: T,
}

/// Creates a [`Fold`] cursor over `i`, seeded with `init`.
#[inline]
pub fn fold<Op, I, T>(op: Op, i: I, init: T) -> Fold<Op, I, T>
where
    I: Cursor,
    Op: Fn(&T, I::Item) -> T,
    T: Clone,
{
    Fold {
        op,
        inner: i,
        acc: init,
    }
}

/// The partial sums of `i`, seeded with the additive identity.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::fold::partial_sums;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3, 4];
/// let sums = partial_sums(SliceCursor::new(&data));
/// assert_eq!(sums.values().collect::<Vec<i32>>(), [0, 1, 3, 6]);
/// ```
#[inline]
pub fn partial_sums<I>(i: I) -> Fold<impl Fn(&I::Item, I::Item) -> I::Item, I, I::Item>
where
    I: Cursor,
    I::Item: Clone + Zero,
{
    fold(
        |acc: &I::Item, x: I::Item| acc.clone() + x,
        i,
        <I::Item as Zero>::zero(),
    )
}

impl<Op, I: fmt::Debug, T: fmt::Debug> fmt::Debug for Fold<Op, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fold")
            .field("inner", &self.inner)
            .field("acc", &self.acc)
            .finish()
    }
}

impl<Op, I: PartialEq, T: PartialEq> PartialEq for Fold<Op, I, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner && self.acc == other.acc
    }
}

impl<Op, I, T> Cursor for Fold<Op, I, T>
where
    I: Cursor,
    Op: Fn(&T, I::Item) -> T,
    T: Clone,
{
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    #[inline]
    fn current(&self) -> T {
        debug_assert!(
            self.inner.has_current(),
            "called `current` on a terminated cursor"
        );
        self.acc.clone()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.inner.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.acc = (self.op)(&self.acc, self.inner.current());
        self.inner.advance();
    }
}

impl<Op, I, T> ForwardCursor for Fold<Op, I, T>
where
    I: ForwardCursor,
    Op: Fn(&T, I::Item) -> T + Clone,
    T: Clone + PartialEq,
{
}
