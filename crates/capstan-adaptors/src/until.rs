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

//! # Until
//!
//! Cuts a sequence at the first element satisfying a predicate. The
//! satisfying element itself is excluded: the cursor reports termination
//! while the inner cursor sits on it. This turns an unbounded source into
//! a bounded one without knowing the cut position in advance.

use capstan_core::cursor::{Cursor, ForwardCursor};
use std::fmt;

/// A cursor that terminates at the first element satisfying the predicate.
///
/// The predicate must be pure: the termination test evaluates it on the
/// inner cursor's current element every time it is asked.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::until::until;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::iota::Iota;
///
/// let below = until(|x: &i32| *x >= 4, Iota::new(0));
/// assert_eq!(below.values().collect::<Vec<i32>>(), [0, 1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct Until<P, I> {
    p: P,
    inner: I,
}

/// Creates an [`Until`] cursor over `i`.
#[inline]
pub fn until<P, I>(p: P, i: I) -> Until<P, I>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    Until { p, inner: i }
}

impl<P, I: fmt::Debug> fmt::Debug for Until<P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Until").field("inner", &self.inner).finish()
    }
}

impl<P, I: PartialEq> PartialEq for Until<P, I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<P, I> Cursor for Until<P, I>
where
    I: Cursor,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn has_current(&self) -> bool {
        self.inner.has_current() && !(self.p)(&self.inner.current())
    }

    #[inline]
    fn current(&self) -> I::Item {
        debug_assert!(
            self.has_current(),
            "called `current` on a terminated cursor"
        );
        self.inner.current()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.inner.advance();
    }
}

impl<P, I> ForwardCursor for Until<P, I>
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
    fn test_excludes_the_satisfying_element() {
        let data = [1, 2, 9, 3];
        let v: Vec<i32> = until(|x: &i32| *x == 9, SliceCursor::new(&data))
            .values()
            .collect();
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_satisfying_first_element_is_empty() {
        let data = [9, 1, 2];
        let u = until(|x: &i32| *x == 9, SliceCursor::new(&data));
        assert!(!u.has_current());
    }

    #[test]
    fn test_no_satisfying_element_follows_inner_termination() {
        let data = [1, 2];
        let v: Vec<i32> = until(|x: &i32| *x == 9, SliceCursor::new(&data))
            .values()
            .collect();
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_termination_check_is_idempotent() {
        let data = [1, 9];
        let mut u = until(|x: &i32| *x == 9, SliceCursor::new(&data));
        assert!(u.has_current());
        assert!(u.has_current());
        u.advance();
        assert!(!u.has_current());
        assert!(!u.has_current());
    }
}
