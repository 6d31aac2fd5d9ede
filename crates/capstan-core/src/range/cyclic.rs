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

//! # Cyclic Range
//!
//! `Cyclic<I>` repeats a finite sequence forever: whenever advancing the
//! inner cursor would terminate it, the inner cursor is reset to a copy of
//! the start saved at construction. The forward-level bound on the inner
//! cursor is what makes that saved start possible; an input-level,
//! single-pass handle cannot be cycled.

use crate::cursor::{Cursor, ForwardCursor};

/// A non-terminating wraparound view of a forward cursor.
///
/// The one degenerate case is an inner cursor that is already terminated
/// at capture: cycling it would loop without ever producing an element, so
/// the cyclic range exposes termination immediately instead.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::CursorExt;
/// use capstan_core::range::counted::Counted;
/// use capstan_core::range::cyclic::Cyclic;
/// use capstan_core::range::slice::SliceCursor;
///
/// let data = [1, 2, 3];
/// let looped: Vec<i32> = Counted::new(Cyclic::new(SliceCursor::new(&data)), 7)
///     .values()
///     .collect();
/// assert_eq!(looped, [1, 2, 3, 1, 2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cyclic<I> {
    inner: I,
    start: I,
}

impl<I: ForwardCursor> Cyclic<I> {
    /// Creates a cyclic view, saving `inner`'s position as the wrap target.
    #[inline]
    pub fn new(inner: I) -> Self {
        let start = inner.clone();
        Self { inner, start }
    }
}

impl<I: ForwardCursor> Cursor for Cyclic<I> {
    type Item = I::Item;

    #[inline]
    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        debug_assert!(
            self.inner.has_current(),
            "called `current` on a terminated cursor"
        );
        self.inner.current()
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(
            self.inner.has_current(),
            "called `advance` on a terminated cursor"
        );
        self.inner.advance();
        if !self.inner.has_current() {
            self.inner = self.start.clone();
        }
    }
}

impl<I: ForwardCursor> ForwardCursor for Cyclic<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::range::slice::SliceCursor;

    #[test]
    fn test_wraps_around_to_saved_start() {
        let data = [1, 2];
        let mut c = Cyclic::new(SliceCursor::new(&data));
        assert_eq!(c.current(), 1);
        c.advance();
        assert_eq!(c.current(), 2);
        c.advance();
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_never_terminates_on_nonempty_source() {
        let data = [9];
        let mut c = Cyclic::new(SliceCursor::new(&data));
        for _ in 0..100 {
            assert!(c.has_current());
            assert_eq!(c.current(), 9);
            c.advance();
        }
    }

    #[test]
    fn test_empty_source_terminates_immediately() {
        let data: [i32; 0] = [];
        let c = Cyclic::new(SliceCursor::new(&data));
        assert!(!c.has_current());
    }

    #[test]
    fn test_wrap_preserves_mid_sequence_capture() {
        let data = [1, 2, 3];
        let mut start = SliceCursor::new(&data);
        start.advance();
        // Captured at the 2: the cycle is 2, 3, 2, 3, ...
        let mut c = Cyclic::new(start);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(c.current());
            c.advance();
        }
        assert_eq!(seen, [2, 3, 2, 3, 2]);
    }
}
