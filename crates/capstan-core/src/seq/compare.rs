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

//! # Lexicographic Comparison
//!
//! Three-way comparison of two cursors, the derived equality tests, and
//! membership-style tests against literal slices. The rules are the usual
//! lexicographic ones: the first differing pair decides; a strict prefix
//! compares less; simultaneous termination is equality.

use crate::cursor::Cursor;
use std::cmp::Ordering;

/// Lexicographically compares at most `n` elements of two cursors.
///
/// After `n` equal pairs (or when either side terminates) the comparison
/// falls back to the termination flags: the side that still has data
/// compares greater.
///
/// # Panics
///
/// Panics if a compared pair is unordered (e.g. a NaN).
pub fn compare_n<I, J>(mut i: I, mut j: J, mut n: usize) -> Ordering
where
    I: Cursor,
    J: Cursor<Item = I::Item>,
    I::Item: PartialOrd,
{
    while n > 0 && i.has_current() && j.has_current() {
        let a = i.current();
        let b = j.current();
        match a
            .partial_cmp(&b)
            .expect("`compare` requires ordered elements")
        {
            Ordering::Equal => {}
            decided => return decided,
        }
        i.advance();
        j.advance();
        n -= 1;
    }

    i.has_current().cmp(&j.has_current())
}

/// Lexicographically compares two cursors without an element bound.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use capstan_core::range::slice::SliceCursor;
/// use capstan_core::seq::compare::compare;
///
/// let a = [1, 2, 3];
/// let b = [1, 2, 4];
/// assert_eq!(compare(SliceCursor::new(&a), SliceCursor::new(&b)), Ordering::Less);
/// ```
#[inline]
pub fn compare<I, J>(i: I, j: J) -> Ordering
where
    I: Cursor,
    J: Cursor<Item = I::Item>,
    I::Item: PartialOrd,
{
    compare_n(i, j, usize::MAX)
}

/// Returns `true` if two cursors yield equal sequences.
#[inline]
pub fn equal<I, J>(i: I, j: J) -> bool
where
    I: Cursor,
    J: Cursor<Item = I::Item>,
    I::Item: PartialOrd,
{
    compare(i, j) == Ordering::Equal
}

/// Returns `true` if the first `n` elements of two cursors are equal and
/// neither outlives the other within that bound.
#[inline]
pub fn equal_n<I, J>(i: I, j: J, n: usize) -> bool
where
    I: Cursor,
    J: Cursor<Item = I::Item>,
    I::Item: PartialOrd,
{
    compare_n(i, j, n) == Ordering::Equal
}

/// Returns `true` if `i` yields exactly the elements of `literal` and then
/// terminates.
///
/// # Examples
///
/// ```rust
/// use capstan_core::range::slice::SliceCursor;
/// use capstan_core::seq::compare::matches;
///
/// let data = [1, 2, 3];
/// assert!(matches(SliceCursor::new(&data), &[1, 2, 3]));
/// assert!(!matches(SliceCursor::new(&data), &[1, 2]));
/// ```
pub fn matches<I>(mut i: I, literal: &[I::Item]) -> bool
where
    I: Cursor,
    I::Item: PartialEq,
{
    for t in literal {
        if !i.has_current() || i.current() != *t {
            return false;
        }
        i.advance();
    }

    !i.has_current()
}

/// Returns `true` if `i` yields at least the elements of `literal`, in
/// order, from its current position.
///
/// Unlike [`matches`], the cursor may continue past the literal.
pub fn starts_with<I>(mut i: I, literal: &[I::Item]) -> bool
where
    I: Cursor,
    I::Item: PartialEq,
{
    for t in literal {
        if !i.has_current() || i.current() != *t {
            return false;
        }
        i.advance();
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::slice::SliceCursor;
    use crate::series::iota::Iota;

    #[test]
    fn test_self_compare_is_equal() {
        let data = [1, 2, 3];
        let i = SliceCursor::new(&data);
        let copy = i;
        assert_eq!(compare(i, copy), Ordering::Equal);
    }

    #[test]
    fn test_first_difference_decides() {
        let a = [1, 5, 0];
        let b = [1, 4, 9];
        assert_eq!(
            compare(SliceCursor::new(&a), SliceCursor::new(&b)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_strict_prefix_compares_less() {
        let a = [1, 2];
        let b = [1, 2, 3];
        assert_eq!(
            compare(SliceCursor::new(&a), SliceCursor::new(&b)),
            Ordering::Less
        );
        assert_eq!(
            compare(SliceCursor::new(&b), SliceCursor::new(&a)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_bounded_compare_ignores_later_differences() {
        let a = [1, 2, 9];
        let b = [1, 2, 0];
        assert_eq!(
            compare_n(SliceCursor::new(&a), SliceCursor::new(&b), 2),
            Ordering::Equal
        );
    }

    #[test]
    fn test_bounded_compare_of_two_infinite_sequences() {
        assert_eq!(compare_n(Iota::new(0), Iota::new(0), 1000), Ordering::Equal);
        assert_eq!(compare_n(Iota::new(0), Iota::new(1), 1000), Ordering::Less);
    }

    #[test]
    fn test_empty_sequences_are_equal() {
        let a: [i32; 0] = [];
        let b: [i32; 0] = [];
        assert!(equal(SliceCursor::new(&a), SliceCursor::new(&b)));
    }

    #[test]
    fn test_matches_requires_simultaneous_exhaustion() {
        let data = [4, 5];
        assert!(matches(SliceCursor::new(&data), &[4, 5]));
        assert!(!matches(SliceCursor::new(&data), &[4]));
        assert!(!matches(SliceCursor::new(&data), &[4, 5, 6]));
    }

    #[test]
    fn test_starts_with_allows_longer_sequences() {
        assert!(starts_with(Iota::new(3), &[3, 4, 5]));
        assert!(!starts_with(Iota::new(3), &[3, 5]));
    }

    #[test]
    fn test_randomized_compare_agrees_with_slice_ordering() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let a: Vec<u8> = (0..rng.gen_range(0..8)).map(|_| rng.gen_range(0..4)).collect();
            let b: Vec<u8> = (0..rng.gen_range(0..8)).map(|_| rng.gen_range(0..4)).collect();
            let expected = a.as_slice().cmp(b.as_slice());
            assert_eq!(
                compare(SliceCursor::new(&a), SliceCursor::new(&b)),
                expected,
                "mismatch for {:?} vs {:?}",
                a,
                b
            );
        }
    }
}
