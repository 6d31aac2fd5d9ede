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

//! # Raw-Pointer Range
//!
//! The unsafe escape hatch of the range family. `PtrCursor<T>` walks raw
//! memory with span/view semantics: it has no end of its own, so the caller
//! bounds traversal externally, usually by wrapping it in
//! [`crate::range::counted::Counted`] or by comparing against a second
//! cursor through [`crate::range::interval::Interval`]. The termination flag
//! is simply "the pointer is non-null", which makes the null cursor the
//! canonical terminated range of this kind.

use crate::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, MutCursor, OutputCursor,
    RandomAccessCursor,
};

/// An unsafe raw-pointer range with the full capability ladder.
///
/// `PtrCursor` does not own and cannot bound the storage it walks. All
/// safety obligations sit on the constructor: once a cursor is built over a
/// live allocation, the safe methods stay within the contract the caller
/// promised.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::Cursor;
/// use capstan_core::range::counted::Counted;
/// use capstan_core::range::ptr::PtrCursor;
///
/// let mut data = [3, 1, 4];
/// let n = data.len();
/// // SAFETY: the cursor is bounded to the array's length below.
/// let p = unsafe { PtrCursor::new(data.as_mut_ptr()) };
/// let mut c = Counted::new(p, n);
/// let mut seen = Vec::new();
/// while c.has_current() {
///     seen.push(c.current());
///     c.advance();
/// }
/// assert_eq!(seen, [3, 1, 4]);
/// ```
pub struct PtrCursor<T> {
    ptr: *mut T,
}

// Manual impls so `PtrCursor<T>` is a copyable, comparable position
// regardless of `T`: its position is the address itself.
impl<T> Clone for PtrCursor<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PtrCursor<T> {}

impl<T> PartialEq for PtrCursor<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for PtrCursor<T> {}

impl<T> std::hash::Hash for PtrCursor<T> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<T> std::fmt::Debug for PtrCursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PtrCursor").field("ptr", &self.ptr).finish()
    }
}

impl<T> Default for PtrCursor<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T> PtrCursor<T> {
    /// Creates a cursor over raw memory starting at `ptr`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `ptr` is either null or points into a
    /// live allocation of initialized `T`, that every position the cursor is
    /// moved to stays within that allocation (one-past-the-end is allowed
    /// for motion but not for access), and that the allocation outlives the
    /// cursor and all of its copies.
    #[inline]
    pub const unsafe fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    /// Creates the null cursor, which is terminated from birth.
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
        }
    }
}

impl<T: Clone> Cursor for PtrCursor<T> {
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        !self.ptr.is_null()
    }

    #[inline]
    fn current(&self) -> T {
        debug_assert!(
            !self.ptr.is_null(),
            "called `current` on a terminated cursor"
        );
        // SAFETY: the constructor contract guarantees the pointer addresses
        // a live, initialized T while non-null.
        unsafe { (*self.ptr).clone() }
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            !self.ptr.is_null(),
            "called `advance` on a terminated cursor"
        );
        self.ptr = self.ptr.wrapping_add(1);
    }
}

impl<T: Clone> MutCursor for PtrCursor<T> {
    #[inline]
    fn current_mut(&mut self) -> &mut T {
        debug_assert!(
            !self.ptr.is_null(),
            "called `current_mut` on a terminated cursor"
        );
        // SAFETY: the constructor contract guarantees exclusive access to a
        // live, initialized T while non-null.
        unsafe { &mut *self.ptr }
    }
}

impl<T> OutputCursor for PtrCursor<T> {
    type Item = T;

    #[inline]
    fn has_space(&self) -> bool {
        !self.ptr.is_null()
    }

    #[inline]
    fn put(&mut self, value: T) {
        debug_assert!(!self.ptr.is_null(), "called `put` on a terminated cursor");
        // SAFETY: the constructor contract guarantees the pointer addresses
        // live, initialized storage while non-null.
        unsafe {
            *self.ptr = value;
        }
        self.ptr = self.ptr.wrapping_add(1);
    }
}

impl<T: Clone> ForwardCursor for PtrCursor<T> {}

impl<T: Clone> BidirectionalCursor for PtrCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.ptr = self.ptr.wrapping_sub(1);
    }
}

impl<T: Clone> RandomAccessCursor for PtrCursor<T> {
    #[inline]
    fn seek(&mut self, offset: isize) {
        self.ptr = self.ptr.wrapping_offset(offset);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        // SAFETY: per the constructor contract both cursors walk the same
        // allocation, which is the requirement of `offset_from`.
        unsafe { other.ptr.offset_from(self.ptr) }
    }

    #[inline]
    fn peek_at(&self, offset: isize) -> T {
        // SAFETY: the constructor contract guarantees the addressed position
        // holds a live, initialized T.
        unsafe { (*self.ptr.wrapping_offset(offset)).clone() }
    }
}

impl<T: Clone> ContiguousCursor for PtrCursor<T> {
    #[inline]
    fn as_ptr(&self) -> *const T {
        self.ptr as *const T
    }
}
