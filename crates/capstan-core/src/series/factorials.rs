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

//! # Factorial Sequence

use crate::cursor::{Cursor, ForwardCursor};
use num_traits::One;
use std::ops::{Add, Mul};

/// The never-terminating sequence `1, 1, 2, 6, 24, ...`.
///
/// The current element starts at the multiplicative identity; advancing
/// multiplies it by an internal counter that increments after use. Overflow
/// follows the host numeric type; `f64` is the conventional choice when
/// large factorials are needed.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::factorials::Factorials;
///
/// let f: Vec<u64> = Factorials::new().values().take(6).collect();
/// assert_eq!(f, [1, 1, 2, 6, 24, 120]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factorials<T> {
    acc: T,
    counter: T,
}

impl<T: One> Factorials<T> {
    /// Creates the sequence at `0! == 1`.
    #[inline]
    pub fn new() -> Self {
        Self {
            acc: T::one(),
            counter: T::one(),
        }
    }
}

impl<T: One> Default for Factorials<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for Factorials<T>
where
    T: Copy + Mul<Output = T> + Add<Output = T> + One,
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
        self.acc = self.acc * self.counter;
        self.counter = self.counter + T::one();
    }
}

impl<T> ForwardCursor for Factorials<T> where
    T: Copy + Mul<Output = T> + Add<Output = T> + One + PartialEq
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_first_factorials() {
        let mut c: Factorials<u32> = Factorials::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(c.current());
            c.advance();
        }
        assert_eq!(seen, [1u32, 1, 2, 6, 24]);
    }

    #[test]
    fn test_clone_branches_independently() {
        let mut a: Factorials<u64> = Factorials::new();
        a.advance();
        a.advance();
        let mut b = a;
        b.advance();
        assert_eq!(a.current(), 2);
        assert_eq!(b.current(), 6);
    }
}
