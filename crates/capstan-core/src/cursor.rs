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

//! # Cursor Capability Taxonomy
//!
//! The trait family every capstan handle implements. A cursor bundles three
//! operations: a termination test (`has_current`), a current-element
//! accessor, and an advance. Refinement levels add equality and saved-copy
//! re-traversal (forward), reverse motion (bidirectional), offset arithmetic
//! (random-access), and stable element addresses (contiguous).
//!
//! ## Contract
//!
//! - `has_current` is non-mutating and idempotent: calling it twice in a row
//!   without advancing returns the same answer. Once it returns `false` it
//!   keeps returning `false`; a terminated cursor never revives.
//! - `current` and `advance` have the precondition `has_current()`. Calling
//!   either on a terminated cursor is a contract violation; implementations
//!   fail loudly (an assertion or an index panic) rather than return stale
//!   data.
//! - Advancing past the last element deterministically flips the flag.
//! - Cursors are independent values: cloning one and advancing the clone
//!   never affects the original. The only sanctioned exception is the
//!   insertion adaptors in [`crate::insert`], which share their target
//!   container on purpose.
//! - A type implements a refinement level only if it satisfies every
//!   operation of that level; levels are opt-in, never blanket.
//!
//! ## Motivation
//!
//! Fusing the termination test into the handle removes the paired
//! end-iterator object and lets infinite sequences, counted views, and
//! sentinel-terminated sources share one traversal vocabulary. The derived
//! traits ([`BoundedCursor`], [`MeasuredCursor`]) expose the O(1) fast paths
//! that the brute-force algorithms in [`crate::seq`] fall back from.

use crate::bridge::CursorIter;

/// An input-level iteration handle: termination test, read, advance.
///
/// This is the root of the capability taxonomy. Every range, generator, and
/// combinator in the capstan ecosystem implements it.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::Cursor;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3];
/// let mut c = SliceCursor::new(&data);
/// let mut total = 0;
/// while c.has_current() {
///     total += c.current();
///     c.advance();
/// }
/// assert_eq!(total, 6);
/// ```
pub trait Cursor {
    /// The element type produced by this cursor.
    type Item;

    /// Returns `true` while the cursor denotes a valid current element.
    ///
    /// Non-mutating and idempotent. Once `false`, stays `false`.
    fn has_current(&self) -> bool;

    /// Returns the current element.
    ///
    /// # Preconditions
    ///
    /// `has_current()` must be `true`.
    fn current(&self) -> Self::Item;

    /// Moves the cursor to the next element.
    ///
    /// After advancing, `has_current()` must be re-checked before the next
    /// access.
    ///
    /// # Preconditions
    ///
    /// `has_current()` must be `true`.
    fn advance(&mut self);
}

/// An output-level handle: termination test plus write-and-advance.
///
/// `put` writes a value through the current position and advances in one
/// step, mirroring the write side of lockstep copy algorithms. For handles
/// over fixed storage `has_space` reflects the remaining room; insertion
/// adaptors never run out.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::OutputCursor;
/// use capstan_core::insert::back_inserter;
///
/// let mut v: Vec<i32> = Vec::new();
/// let mut out = back_inserter(&mut v);
/// out.put(1);
/// out.put(2);
/// assert_eq!(v, [1, 2]);
/// ```
pub trait OutputCursor {
    /// The element type accepted by this cursor.
    type Item;

    /// Returns `true` while the cursor can accept another value.
    fn has_space(&self) -> bool;

    /// Writes `value` through the current position and advances.
    ///
    /// # Preconditions
    ///
    /// `has_space()` must be `true`.
    fn put(&mut self, value: Self::Item);
}

/// A cursor over mutable backing storage, exposing a read/write reference
/// to the current element.
pub trait MutCursor: Cursor {
    /// Returns a mutable reference to the current element.
    ///
    /// # Preconditions
    ///
    /// `has_current()` must be `true`.
    fn current_mut(&mut self) -> &mut Self::Item;
}

/// A forward-level cursor: saved copies re-traverse independently, and two
/// cursors compare equal exactly when they denote the same logical position
/// in the same logical sequence.
///
/// This is a marker refinement; the operations come from `Clone` and
/// `PartialEq`. Implement it only for types whose clones are genuinely
/// independent.
pub trait ForwardCursor: Cursor + Clone + PartialEq {}

/// A bidirectional cursor: adds reverse motion symmetric to [`Cursor::advance`].
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves the cursor to the previous element.
    ///
    /// # Preconditions
    ///
    /// A valid element must exist before the current position; retreating
    /// before the first element is a contract violation.
    fn retreat(&mut self);
}

/// A random-access cursor: offset motion, distances, and offset reads, all
/// consistent with repeated single steps.
///
/// Consistency means `seek(n)` is observationally equal to `n` advances
/// (or `-n` retreats), `seek(-1)` undoes `seek(1)`, and
/// `a.distance_to(&b)` counts the advances taking `a` to `b`.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves the cursor by `offset` elements; negative offsets retreat.
    ///
    /// # Preconditions
    ///
    /// The target position must lie within the cursor's valid range
    /// (one-past-the-last is permitted).
    fn seek(&mut self, offset: isize);

    /// Returns the number of advances that take `self` to `other`.
    ///
    /// Negative when `other` precedes `self`.
    ///
    /// # Preconditions
    ///
    /// Both cursors must traverse the same logical sequence.
    fn distance_to(&self, other: &Self) -> isize;

    /// Reads the element `offset` positions away without moving.
    ///
    /// # Preconditions
    ///
    /// The addressed position must hold a valid element.
    fn peek_at(&self, offset: isize) -> Self::Item;
}

/// A contiguous cursor: the current element occupies a stable address, and
/// addresses are congruent with offset indexing (`as_ptr() + k` addresses
/// the same element as `peek_at(k)`).
pub trait ContiguousCursor: RandomAccessCursor {
    /// Returns the address of the current element.
    ///
    /// The pointer is valid for reads while `has_current()` holds and the
    /// backing storage is alive.
    fn as_ptr(&self) -> *const Self::Item;
}

/// A cursor with a natural one-past-the-last position obtainable in O(1).
///
/// This is the fast path behind [`crate::seq::end_of`]; cursors without it
/// are measured by brute-force advancing.
pub trait BoundedCursor: Cursor {
    /// Returns a cursor collapsed to the one-past-the-last position.
    ///
    /// The returned cursor is terminated: `has_current()` is `false`.
    fn end(&self) -> Self
    where
        Self: Sized;
}

/// A cursor that knows how many elements remain in O(1).
///
/// This is the fast path behind [`crate::seq::length`]; it is also what
/// allows [`crate::range::counted::take`]-style views to report exact sizes
/// without consuming their source.
pub trait MeasuredCursor: Cursor {
    /// Returns the exact number of elements left, including the current one.
    fn remaining(&self) -> usize;
}

/// Blanket conveniences available on every cursor.
pub trait CursorExt: Cursor + Sized {
    /// Adapts this cursor into a standard iterator over its values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use capstan_core::cursor::CursorExt;
    /// use capstan_core::range::slice::SliceCursor;
    ///
    /// let data = [1, 2, 3];
    /// let doubled: Vec<i32> = SliceCursor::new(&data).values().map(|x| x * 2).collect();
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    #[inline]
    fn values(self) -> CursorIter<Self> {
        CursorIter::new(self)
    }
}

impl<I: Cursor> CursorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::slice::SliceCursor;

    #[test]
    fn test_termination_check_is_idempotent() {
        let data = [7];
        let mut c = SliceCursor::new(&data);
        assert!(c.has_current());
        assert!(c.has_current());
        c.advance();
        assert!(!c.has_current());
        assert!(!c.has_current());
    }

    #[test]
    fn test_clones_advance_independently() {
        let data = [1, 2, 3];
        let mut a = SliceCursor::new(&data);
        let b = a.clone();
        a.advance();
        assert_eq!(a.current(), 2);
        assert_eq!(b.current(), 1);
    }

    #[test]
    fn test_values_bridges_into_std_iteration() {
        let data = [1, 2, 3, 4];
        let total: i32 = SliceCursor::new(&data).values().sum();
        assert_eq!(total, 10);
    }
}
