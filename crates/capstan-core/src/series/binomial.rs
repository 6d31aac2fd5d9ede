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

//! # Binomial-Coefficient Row
//!
//! `BinomialRow<T>` enumerates one row of Pascal's triangle,
//! `C(n, 0), C(n, 1), ..., C(n, n)`, via the multiplicative recurrence
//! `C(n, k + 1) = C(n, k) * (n - k) / (k + 1)`. The multiplication happens
//! before the division, which keeps every intermediate value an exact
//! multiple of its divisor; dividing first would truncate. This is the one
//! generator with a natural finite bound: the termination flag is `k <= n`.

use crate::cursor::{BoundedCursor, Cursor, ForwardCursor, MeasuredCursor};
use num_traits::PrimInt;

/// The finite sequence `C(n, 0) ..= C(n, n)`.
///
/// Overflow of intermediate products for large `n` follows the host
/// integer type.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::series::binomial::BinomialRow;
///
/// let row: Vec<u64> = BinomialRow::new(5).values().collect();
/// assert_eq!(row, [1, 5, 10, 10, 5, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinomialRow<T> {
    n: T,
    k: T,
    nk: T,
}

impl<T: PrimInt> BinomialRow<T> {
    /// Creates the row for `n`, positioned at `C(n, 0) == 1`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    #[inline]
    pub fn new(n: T) -> Self {
        assert!(n >= T::zero(), "binomial row requires a non-negative n");
        Self {
            n,
            k: T::zero(),
            nk: T::one(),
        }
    }

    /// Creates the row for `n` if `n` is non-negative.
    #[inline]
    pub fn try_new(n: T) -> Option<Self> {
        if n >= T::zero() {
            Some(Self {
                n,
                k: T::zero(),
                nk: T::one(),
            })
        } else {
            None
        }
    }
}

impl<T: PrimInt> Cursor for BinomialRow<T> {
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        self.k <= self.n
    }

    #[inline]
    fn current(&self) -> T {
        debug_assert!(
            self.has_current(),
            "called `current` on a terminated cursor"
        );
        self.nk
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.has_current(),
            "called `advance` on a terminated cursor"
        );
        // Multiply before dividing: nk * (n - k) is always an exact
        // multiple of k + 1.
        self.nk = self.nk * (self.n - self.k);
        self.k = self.k + T::one();
        self.nk = self.nk / self.k;
    }
}

impl<T: PrimInt> ForwardCursor for BinomialRow<T> {}

impl<T: PrimInt> BoundedCursor for BinomialRow<T> {
    #[inline]
    fn end(&self) -> Self {
        Self {
            n: self.n,
            k: self.n + T::one(),
            nk: T::zero(),
        }
    }
}

impl<T: PrimInt> MeasuredCursor for BinomialRow<T> {
    #[inline]
    fn remaining(&self) -> usize {
        if self.k > self.n {
            return 0;
        }
        (self.n - self.k)
            .to_usize()
            .expect("remaining length exceeds usize::MAX")
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{BoundedCursor, Cursor, CursorExt, MeasuredCursor};

    #[test]
    fn test_row_five_enumerates_fully() {
        let row: Vec<i64> = BinomialRow::new(5).values().collect();
        assert_eq!(row, [1, 5, 10, 10, 5, 1]);
    }

    #[test]
    fn test_row_zero_is_single_one() {
        let row: Vec<u32> = BinomialRow::new(0u32).values().collect();
        assert_eq!(row, [1]);
    }

    #[test]
    fn test_terminates_after_last_coefficient() {
        let mut c = BinomialRow::new(1u8);
        assert!(c.has_current());
        c.advance();
        assert!(c.has_current());
        c.advance();
        assert!(!c.has_current());
    }

    #[test]
    fn test_exact_division_on_a_larger_row() {
        // Row 10 has non-monotone divisibility; exactness depends on the
        // multiply-before-divide ordering.
        let row: Vec<u64> = BinomialRow::new(10u64).values().collect();
        assert_eq!(row, [1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]);
    }

    #[test]
    fn test_remaining_and_end() {
        let mut c = BinomialRow::new(3u32);
        assert_eq!(c.remaining(), 4);
        c.advance();
        assert_eq!(c.remaining(), 3);
        let e = c.end();
        assert!(!e.has_current());
        assert_eq!(e.remaining(), 0);
    }

    #[test]
    fn test_negative_n_is_rejected() {
        assert!(BinomialRow::try_new(-1i32).is_none());
        assert!(BinomialRow::try_new(0i32).is_some());
    }
}
