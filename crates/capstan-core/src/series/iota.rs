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

//! # Arithmetic Progression
//!
//! `Iota<T>` counts upward from a seed by one unit per advance, forever.
//! Over primitive integers it additionally supports the full random-access
//! ladder, since positions map to values by plain arithmetic.

use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor};
use num_traits::{One, PrimInt};
use std::ops::Add;

/// The never-terminating sequence `t, t + 1, t + 2, ...`.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::iota::Iota;
///
/// let naturals: Vec<u32> = Iota::new(0u32).values().take(4).collect();
/// assert_eq!(naturals, [0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Iota<T> {
    t: T,
}

impl<T> Iota<T> {
    /// Creates a progression starting at `t`.
    #[inline]
    pub const fn new(t: T) -> Self {
        Self { t }
    }
}

impl<T> Cursor for Iota<T>
where
    T: Copy + Add<Output = T> + One,
{
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        true
    }

    #[inline]
    fn current(&self) -> T {
        self.t
    }

    #[inline]
    fn advance(&mut self) {
        self.t = self.t + T::one();
    }
}

impl<T> ForwardCursor for Iota<T> where T: Copy + Add<Output = T> + One + PartialEq {}

impl<T: PrimInt> BidirectionalCursor for Iota<T> {
    #[inline]
    fn retreat(&mut self) {
        self.t = self.t - T::one();
    }
}

impl<T: PrimInt> RandomAccessCursor for Iota<T> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        if offset >= 0 {
            let step = T::from(offset).expect("`seek` offset exceeds the element type");
            self.t = self.t + step;
        } else {
            let step =
                T::from(offset.unsigned_abs()).expect("`seek` offset exceeds the element type");
            self.t = self.t - step;
        }
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        if other.t >= self.t {
            (other.t - self.t)
                .to_isize()
                .expect("distance exceeds isize::MAX")
        } else {
            -(self.t - other.t)
                .to_isize()
                .expect("distance exceeds isize::MAX")
        }
    }

    #[inline]
    fn peek_at(&self, offset: isize) -> T {
        let mut probe = *self;
        probe.seek(offset);
        probe.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, RandomAccessCursor};

    #[test]
    fn test_counts_from_seed() {
        let mut c = Iota::new(5);
        assert_eq!(c.current(), 5);
        c.advance();
        c.advance();
        assert_eq!(c.current(), 7);
        assert!(c.has_current());
    }

    #[test]
    fn test_seek_matches_single_steps() {
        let mut stepped = Iota::new(0i32);
        for _ in 0..4 {
            stepped.advance();
        }
        let mut sought = Iota::new(0i32);
        sought.seek(4);
        assert_eq!(sought, stepped);
        sought.seek(-1);
        sought.seek(1);
        assert_eq!(sought, stepped);
    }

    #[test]
    fn test_distance_is_signed() {
        let a = Iota::new(3i64);
        let b = Iota::new(8i64);
        assert_eq!(a.distance_to(&b), 5);
        assert_eq!(b.distance_to(&a), -5);
    }

    #[test]
    fn test_peek_does_not_move() {
        let c = Iota::new(10u64);
        assert_eq!(c.peek_at(3), 13);
        assert_eq!(c.current(), 10);
    }
}
