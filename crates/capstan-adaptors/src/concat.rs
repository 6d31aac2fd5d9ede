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

//! # Ordered Concatenation
//!
//! All elements of the first sequence, then all of the second. The two-way
//! [`Concat`] is the primitive; the [`concatenate!`] macro folds it
//! right-associatively over any number of cursors, mirroring how a variadic
//! construction would nest.

use capstan_core::cursor::{Cursor, ForwardCursor};

/// A cursor yielding the first sequence, then the second.
///
/// The two inner cursors may be different types as long as they yield the
/// same element type.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::concat::Concat;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let a = [1, 2];
/// let b = [3, 4];
/// let c = Concat::new(SliceCursor::new(&a), SliceCursor::new(&b));
/// assert_eq!(c.values().collect::<Vec<i32>>(), [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concat<A, B> {
    a: A,
    b: B,
}

impl<A, B> Concat<A, B> {
    /// Creates a concatenation of `a` then `b`.
    #[inline]
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

/// Concatenates any number of cursors in order, folding
/// [`Concat`] right-associatively.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::concatenate;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let a = [1, 2];
/// let b = [3];
/// let c = [4, 5];
/// let all = concatenate!(
///     SliceCursor::new(&a),
///     SliceCursor::new(&b),
///     SliceCursor::new(&c),
/// );
/// assert_eq!(all.values().collect::<Vec<i32>>(), [1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! concatenate {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::concat::Concat::new($first, $crate::concatenate!($($rest),+))
    };
}

impl<T, A, B> Cursor for Concat<A, B>
where
    A: Cursor<Item = T>,
    B: Cursor<Item = T>,
{
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        self.a.has_current() || self.b.has_current()
    }

    #[inline]
    fn current(&self) -> T {
        if self.a.has_current() {
            self.a.current()
        } else {
            self.b.current()
        }
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.has_current(),
            "called `advance` on a terminated cursor"
        );
        if self.a.has_current() {
            self.a.advance();
        } else {
            self.b.advance();
        }
    }
}

impl<T, A, B> ForwardCursor for Concat<A, B>
where
    A: ForwardCursor<Item = T>,
    B: ForwardCursor<Item = T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_core::cursor::{Cursor, CursorExt};
    use capstan_core::range::slice::SliceCursor;
    use capstan_core::series::empty::Empty;

    #[test]
    fn test_yields_first_then_second() {
        let a = [1, 2];
        let b = [3];
        let v: Vec<i32> = Concat::new(SliceCursor::new(&a), SliceCursor::new(&b))
            .values()
            .collect();
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_empty_first_side_vanishes() {
        let b = [1, 2];
        let v: Vec<i32> = Concat::new(Empty::new(), SliceCursor::new(&b))
            .values()
            .collect();
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_empty_second_side_vanishes() {
        let a = [1, 2];
        let v: Vec<i32> = Concat::new(SliceCursor::new(&a), Empty::new())
            .values()
            .collect();
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_both_sides_empty_terminates_immediately() {
        let c: Concat<Empty<i32>, Empty<i32>> = Concat::new(Empty::new(), Empty::new());
        assert!(!c.has_current());
    }

    #[test]
    fn test_n_ary_macro_folds_in_order() {
        let a = [1, 2];
        let b = [3];
        let c = [4, 5];
        let all = concatenate!(
            SliceCursor::new(&a),
            SliceCursor::new(&b),
            SliceCursor::new(&c)
        );
        assert_eq!(all.values().collect::<Vec<i32>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_single_argument_macro_is_identity() {
        let a = [7, 8];
        let one = concatenate!(SliceCursor::new(&a));
        assert_eq!(one.values().collect::<Vec<i32>>(), [7, 8]);
    }

    #[test]
    fn test_mixed_cursor_kinds() {
        use capstan_core::range::counted::Counted;
        use capstan_core::series::iota::Iota;
        let a = [100];
        let all = concatenate!(SliceCursor::new(&a), Counted::new(Iota::new(0), 3));
        assert_eq!(all.values().collect::<Vec<i32>>(), [100, 0, 1, 2]);
    }
}
