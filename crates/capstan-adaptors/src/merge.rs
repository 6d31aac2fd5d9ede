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

//! # Stable Sorted Merge
//!
//! Merges two individually sorted sequences into one sorted sequence. The
//! comparisons use only `<`: two elements are *equivalent* when neither is
//! strictly less than the other, which is weaker than equality. On every
//! equivalent draw a side-preference flag picks the supplier and then
//! flips, so runs of equivalent elements interleave deterministically
//! between the sides instead of draining one side first.
//!
//! ## Preconditions
//!
//! Both inputs must already be sorted ascending. This is not checked: merge
//! over unsorted inputs produces a valid-looking but unspecified sequence.
//! The check would cost a full pre-pass per input, which the protocol's
//! single-pass model rules out.

use capstan_core::cursor::{Cursor, ForwardCursor};

/// A cursor merging two sorted sequences, alternating sides on equivalent
/// draws.
///
/// Equality compares both inner cursors and the side-preference flag, all
/// of the adaptor's positional state.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::merge::merge2;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let a = [1, 3, 3, 5];
/// let b = [2, 3, 4];
/// let merged = merge2(SliceCursor::new(&a), SliceCursor::new(&b));
/// assert_eq!(merged.values().collect::<Vec<i32>>(), [1, 2, 3, 3, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Merge<A, B> {
    a: A,
    b: B,
    prefer_a: bool,
}

/// Creates a [`Merge`] cursor over two sorted sequences.
///
/// The side-preference flag starts on the first side unless the second
/// side's head is strictly less.
#[inline]
pub fn merge2<T, A, B>(a: A, b: B) -> Merge<A, B>
where
    T: PartialOrd,
    A: Cursor<Item = T>,
    B: Cursor<Item = T>,
{
    let prefer_a = if a.has_current() && b.has_current() {
        // Less or equivalent keeps the first side preferred.
        !(b.current() < a.current())
    } else {
        a.has_current()
    };
    Merge { a, b, prefer_a }
}

/// Merges any number of sorted cursors, folding [`merge2`]
/// right-associatively.
///
/// # Examples
///
/// ```rust
/// use capstan_adaptors::merge;
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::slice::SliceCursor;
///
/// let a = [1, 4];
/// let b = [2, 5];
/// let c = [3, 6];
/// let all = merge!(
///     SliceCursor::new(&a),
///     SliceCursor::new(&b),
///     SliceCursor::new(&c),
/// );
/// assert_eq!(all.values().collect::<Vec<i32>>(), [1, 2, 3, 4, 5, 6]);
/// ```
#[macro_export]
macro_rules! merge {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::merge::merge2($first, $crate::merge!($($rest),+))
    };
}

impl<T, A, B> Cursor for Merge<A, B>
where
    T: PartialOrd,
    A: Cursor<Item = T>,
    B: Cursor<Item = T>,
{
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        self.a.has_current() || self.b.has_current()
    }

    fn current(&self) -> T {
        if self.a.has_current() && self.b.has_current() {
            let x = self.a.current();
            let y = self.b.current();
            if x < y {
                x
            } else if y < x {
                y
            } else if self.prefer_a {
                x
            } else {
                y
            }
        } else if self.a.has_current() {
            self.a.current()
        } else {
            self.b.current()
        }
    }

    fn advance(&mut self) {
        debug_assert!(
            self.has_current(),
            "called `advance` on a terminated cursor"
        );
        if self.a.has_current() && self.b.has_current() {
            let x = self.a.current();
            let y = self.b.current();
            if x < y {
                self.a.advance();
            } else if y < x {
                self.b.advance();
            } else {
                // Equivalent heads: the preferred side supplies the element
                // and the preference switches.
                if self.prefer_a {
                    self.a.advance();
                } else {
                    self.b.advance();
                }
                self.prefer_a = !self.prefer_a;
            }
        } else if self.a.has_current() {
            self.a.advance();
            self.prefer_a = true;
        } else {
            self.b.advance();
            self.prefer_a = false;
        }
    }
}

impl<T, A, B> ForwardCursor for Merge<A, B>
where
    T: PartialOrd,
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
    use rand::Rng;
    use std::cmp::Ordering;

    #[test]
    fn test_merges_sorted_sequences() {
        let a = [1, 3, 3, 5];
        let b = [2, 3, 4];
        let v: Vec<i32> = merge2(SliceCursor::new(&a), SliceCursor::new(&b))
            .values()
            .collect();
        assert_eq!(v, [1, 2, 3, 3, 3, 4, 5]);
    }

    #[test]
    fn test_one_empty_side_drains_the_other() {
        let a = [1, 2];
        let v: Vec<i32> = merge2(SliceCursor::new(&a), Empty::new())
            .values()
            .collect();
        assert_eq!(v, [1, 2]);

        let v: Vec<i32> = merge2(Empty::new(), SliceCursor::new(&a))
            .values()
            .collect();
        assert_eq!(v, [1, 2]);
    }

    // An element whose ordering looks only at the key, so elements from
    // different sides can be equivalent without being equal.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Tagged {
        key: i32,
        side: char,
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    fn tagged(side: char, keys: &[i32]) -> Vec<Tagged> {
        keys.iter().map(|&key| Tagged { key, side }).collect()
    }

    #[test]
    fn test_equivalent_run_alternates_sides_evenly() {
        let a = tagged('a', &[3, 3, 3]);
        let b = tagged('b', &[3, 3]);
        let sides: Vec<char> = merge2(SliceCursor::new(&a), SliceCursor::new(&b))
            .values()
            .map(|t| t.side)
            .collect();
        assert_eq!(sides, ['a', 'b', 'a', 'b', 'a']);
    }

    #[test]
    fn test_equivalent_run_with_uneven_split() {
        let a = tagged('a', &[3, 3, 3]);
        let b = tagged('b', &[3]);
        let sides: Vec<char> = merge2(SliceCursor::new(&a), SliceCursor::new(&b))
            .values()
            .map(|t| t.side)
            .collect();
        // The alternation holds while both sides have equivalent heads;
        // afterwards the surviving side drains.
        assert_eq!(sides, ['a', 'b', 'a', 'a']);
    }

    #[test]
    fn test_preference_resets_between_equivalent_runs() {
        let a = tagged('a', &[1, 1, 5, 5]);
        let b = tagged('b', &[1, 3, 5]);
        let merged: Vec<Tagged> = merge2(SliceCursor::new(&a), SliceCursor::new(&b))
            .values()
            .collect();
        let keys: Vec<i32> = merged.iter().map(|t| t.key).collect();
        assert_eq!(keys, [1, 1, 1, 3, 5, 5, 5]);
        let sides: Vec<char> = merged.iter().map(|t| t.side).collect();
        // First run: a, b, then a alone on the strict draws. Strict draws
        // do not flip the flag, so the 5-run starts preferring a again.
        assert_eq!(sides, ['a', 'b', 'a', 'b', 'a', 'b', 'a']);
    }

    #[test]
    fn test_n_ary_macro_merges_three_ways() {
        let a = [1, 4];
        let b = [2, 5];
        let c = [3, 6];
        let all = merge!(
            SliceCursor::new(&a),
            SliceCursor::new(&b),
            SliceCursor::new(&c)
        );
        assert_eq!(all.values().collect::<Vec<i32>>(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_randomized_merge_agrees_with_sorting() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut a: Vec<u16> = (0..rng.gen_range(0..40)).map(|_| rng.gen_range(0..20)).collect();
            let mut b: Vec<u16> = (0..rng.gen_range(0..40)).map(|_| rng.gen_range(0..20)).collect();
            a.sort_unstable();
            b.sort_unstable();

            let merged: Vec<u16> = merge2(SliceCursor::new(&a), SliceCursor::new(&b))
                .values()
                .collect();

            let mut expected = a.clone();
            expected.extend_from_slice(&b);
            expected.sort_unstable();
            assert_eq!(merged, expected);
        }
    }
}
