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

//! # Filter
//!
//! Keeps only the elements satisfying a predicate. The adaptor settles on
//! the next satisfying element at construction and again after every
//! advance, so the termination flag and the accessor always agree: either
//! the current element satisfies the predicate, or the cursor is
//! terminated.

use capstan_core::cursor::{Cursor, ForwardCursor};
use std::fmt;

/// A cursor yielding only the elements of the inner cursor that satisfy a
/// predicate.
///
/// The predicate is part of the type, not of the runtime state: equality
/// compares the inner cursors only.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::filter::filter;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3, 4, 5];
/// let even = filter(|x: &i32| x % 2 == 0, SliceCursor::new(&data));
/// assert_eq!(even.values().collect::<Vec<i32>>(), [2, 4]);
/// ```
#[derive(Clone)]
pub struct Filter<P, I> {
    p: P,
    inner: I,
}

/// Creates a [`Filter`] cursor over `i`, pre-skipping failing elements.
#[inline]
pub fn filter<P, I>(p: P, i: I) -> Filter<P, I>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    let mut f = Filter { p, inner: i };
    f.settle();
    f
}

impl<P, I> Filter<P, I>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    // Skip forward to the next satisfying element, or to termination.
    fn settle(&mut self) {
        while self.inner.has_current() {
            let value = self.inner.current();
            if (self.p)(&value) {
                break;
            }
            self.inner.advance();
        }
    }
}

impl<P, I: fmt::Debug> fmt::Debug for Filter<P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<P, I: PartialEq> PartialEq for Filter<P, I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<P, I> Cursor for Filter<P, I>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    #[inline]
    fn current(&self) -> I::Item {
        self.inner.current()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.inner.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.inner.advance();
        self.settle();
    }
}

impl<P, I> ForwardCursor for Filter<P, I>
where
    I: ForwardCursor,
    P: Fn(&I::Item) -> bool + Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::{Cursor, CursorExt};
    use capstan_core::range::slice::SliceCursor;

    #[test]
    fn test_pre_skips_failing_leading_elements() {
        let data = [1, 3, 4, 5];
        let f = filter(|x: &i32| x % 2 == 0, SliceCursor::new(&data));
        assert!(f.has_current());
        assert_eq!(f.current(), 4);
    }

    #[test]
    fn test_no_satisfying_element_terminates_at_construction() {
        let data = [1, 3, 5];
        let f = filter(|x: &i32| x % 2 == 0, SliceCursor::new(&data));
        assert!(!f.has_current());
    }

    #[test]
    fn test_settles_after_every_advance() {
        let data = [2, 3, 5, 6, 7];
        let mut f = filter(|x: &i32| x % 2 == 0, SliceCursor::new(&data));
        assert_eq!(f.current(), 2);
        f.advance();
        assert_eq!(f.current(), 6);
        f.advance();
        assert!(!f.has_current());
    }

    #[test]
    fn test_all_elements_pass() {
        let data = [2, 4];
        let v: Vec<i32> = filter(|_: &i32| true, SliceCursor::new(&data))
            .values()
            .collect();
        assert_eq!(v, [2, 4]);
    }
}
