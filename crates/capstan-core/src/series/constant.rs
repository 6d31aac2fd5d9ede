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

//! # Constant Sequence

use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor};
use crate::range::counted::Counted;

/// The never-terminating sequence `t, t, t, ...`.
///
/// Every position is the same, so all motion is a no-op and every pair of
/// positions is at distance zero. The random-access level holds trivially.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::constant::Constant;
///
/// let fives: Vec<i32> = Constant::new(5).values().take(3).collect();
/// assert_eq!(fives, [5, 5, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constant<T> {
    t: T,
}

impl<T> Constant<T> {
    /// Creates the constant sequence of `t`.
    #[inline]
    pub const fn new(t: T) -> Self {
        Self { t }
    }
}

/// The single-element sequence `t`.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::constant::once;
///
/// assert_eq!(once('x').values().collect::<Vec<char>>(), ['x']);
/// ```
#[inline]
pub fn once<T: Clone>(t: T) -> Counted<Constant<T>> {
    Counted::new(Constant::new(t), 1)
}

impl<T: Clone> Cursor for Constant<T> {
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        true
    }

    #[inline]
    fn current(&self) -> T {
        self.t.clone()
    }

    #[inline]
    fn advance(&mut self) {}
}

impl<T: Clone + PartialEq> ForwardCursor for Constant<T> {}

impl<T: Clone + PartialEq> BidirectionalCursor for Constant<T> {
    #[inline]
    fn retreat(&mut self) {}
}

impl<T: Clone + PartialEq> RandomAccessCursor for Constant<T> {
    #[inline]
    fn seek(&mut self, _offset: isize) {}

    #[inline]
    fn distance_to(&self, _other: &Self) -> isize {
        0
    }

    #[inline]
    fn peek_at(&self, _offset: isize) -> T {
        self.t.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, CursorExt, RandomAccessCursor};

    #[test]
    fn test_advance_is_a_no_op() {
        let mut c = Constant::new(7);
        c.advance();
        c.advance();
        assert_eq!(c.current(), 7);
        assert!(c.has_current());
    }

    #[test]
    fn test_motion_is_trivial_at_every_level() {
        let mut c = Constant::new("x");
        c.seek(100);
        assert_eq!(c.current(), "x");
        assert_eq!(c.distance_to(&Constant::new("x")), 0);
    }

    #[test]
    fn test_once_yields_exactly_one_element() {
        let v: Vec<u8> = once(9u8).values().collect();
        assert_eq!(v, [9]);
    }
}
