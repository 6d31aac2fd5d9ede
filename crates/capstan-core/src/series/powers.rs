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

//! # Geometric Progression

use crate::cursor::{Cursor, ForwardCursor};
use num_traits::One;
use std::ops::Mul;

/// The never-terminating sequence `a, a * r, a * r^2, ...` for a fixed
/// ratio `r`.
///
/// The current element is the accumulated product; advancing multiplies it
/// by the ratio. Overflow follows the host numeric type.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::powers::Powers;
///
/// let twos: Vec<i64> = Powers::new(2).values().take(5).collect();
/// assert_eq!(twos, [1, 2, 4, 8, 16]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Powers<T> {
    ratio: T,
    acc: T,
}

impl<T: One> Powers<T> {
    /// Creates the progression `1, r, r^2, ...`.
    #[inline]
    pub fn new(ratio: T) -> Self {
        Self {
            ratio,
            acc: T::one(),
        }
    }
}

impl<T> Powers<T> {
    /// Creates the progression `a, a * r, a * r^2, ...`.
    #[inline]
    pub fn with_initial(ratio: T, initial: T) -> Self {
        Self {
            ratio,
            acc: initial,
        }
    }
}

impl<T> Cursor for Powers<T>
where
    T: Copy + Mul<Output = T>,
{
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        true
    }

    #[inline]
    fn current(&self) -> T {
        self.acc
    }

    #[inline]
    fn advance(&mut self) {
        self.acc = self.acc * self.ratio;
    }
}

impl<T> ForwardCursor for Powers<T> where T: Copy + Mul<Output = T> + PartialEq {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_powers_of_three() {
        let mut c = Powers::new(3u64);
        assert_eq!(c.current(), 1);
        c.advance();
        assert_eq!(c.current(), 3);
        c.advance();
        assert_eq!(c.current(), 9);
        assert!(c.has_current());
    }

    #[test]
    fn test_with_initial_scales_the_whole_sequence() {
        let mut c = Powers::with_initial(2, 5);
        assert_eq!(c.current(), 5);
        c.advance();
        assert_eq!(c.current(), 10);
        c.advance();
        assert_eq!(c.current(), 20);
    }

    #[test]
    fn test_fractional_ratio() {
        let mut c = Powers::new(0.5f64);
        c.advance();
        c.advance();
        assert_eq!(c.current(), 0.25);
    }
}
