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

//! # Apply
//!
//! Transforms each element of an inner cursor through a pure function. The
//! function runs on every read, so it should be cheap; its results are
//! never cached.

use capstan_core::cursor::{Cursor, ForwardCursor};
use std::fmt;

/// A cursor yielding `f(x)` for each element `x` of the inner cursor.
///
/// The function is part of the type, not of the runtime state: equality
/// compares the inner cursors only.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::apply::apply;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3];
/// let doubled = apply(|x: i32| x * 2, SliceCursor::new(&data));
/// assert_eq!(doubled.values().collect::<Vec<i32>>(), [2, 4, 6]);
/// ```
#[derive(Clone)]
pub struct Apply<F, I> {
    f: F,
    inner: I,
}

/// Creates an [`Apply`] cursor over `i`.
#[inline]
pub fn apply<F, I, U>(f: F, i: I) -> Apply<F, I>
where
    I: Cursor,
    F: Fn(I::Item) -> U,
{
    Apply { f, inner: i }
}

impl<F, I: fmt::Debug> fmt::Debug for Apply<F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Apply").field("inner", &self.inner).finish()
    }
}

impl<F, I: PartialEq> PartialEq for Apply<F, I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<F, I, U> Cursor for Apply<F, I>
where
    I: Cursor,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    #[inline]
    fn current(&self) -> U {
        (self.f)(self.inner.current())
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.inner.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.inner.advance();
    }
}

impl<F, I, U> ForwardCursor for Apply<F, I>
where
    I: ForwardCursor,
    F: Fn(I::Item) -> U + Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::{Cursor, CursorExt};
    use capstan_core::range::slice::SliceCursor;
    use capstan_core::series::iota::Iota;

    #[test]
    fn test_maps_every_element() {
        let data = [1, 2, 3];
        let v: Vec<i32> = apply(|x: i32| x + 10, SliceCursor::new(&data))
            .values()
            .collect();
        assert_eq!(v, [11, 12, 13]);
    }

    #[test]
    fn test_termination_follows_inner() {
        let data = [5];
        let mut a = apply(|x: i32| x, SliceCursor::new(&data));
        assert!(a.has_current());
        a.advance();
        assert!(!a.has_current());
    }

    #[test]
    fn test_can_change_the_element_type() {
        let mut a = apply(|x: u32| x.to_string(), Iota::new(7u32));
        assert_eq!(a.current(), "7");
        a.advance();
        assert_eq!(a.current(), "8");
    }

    #[test]
    fn test_equality_ignores_the_function() {
        let data = [1, 2];
        let double = |x: i32| x * 2;
        let a = apply(double, SliceCursor::new(&data));
        let mut b = apply(double, SliceCursor::new(&data));
        assert_eq!(a, b);
        b.advance();
        assert_ne!(a, b);
    }
}
