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

//! # Empty Sequence

use crate::cursor::{BoundedCursor, Cursor, ForwardCursor, MeasuredCursor};
use std::marker::PhantomData;

/// The sequence with no elements, terminated from birth.
///
/// Reading or advancing it is a contract violation and panics
/// unconditionally.
///
/// # Examples
///
/// ```rust
/// use capstan_core::cursor::Cursor;
/// use capstan_core::series::empty::Empty;
///
/// let c: Empty<i32> = Empty::new();
/// assert!(!c.has_current());
/// ```
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates the empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> PartialEq for Empty<T> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Empty<T> {}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn has_current(&self) -> bool {
        false
    }

    fn current(&self) -> T {
        panic!("called `current` on a terminated cursor");
    }

    fn advance(&mut self) {
        panic!("called `advance` on a terminated cursor");
    }
}

impl<T> ForwardCursor for Empty<T> {}

impl<T> BoundedCursor for Empty<T> {
    #[inline]
    fn end(&self) -> Self {
        *self
    }
}

impl<T> MeasuredCursor for Empty<T> {
    #[inline]
    fn remaining(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, MeasuredCursor};

    #[test]
    fn test_terminated_from_birth() {
        let c: Empty<u8> = Empty::new();
        assert!(!c.has_current());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "terminated cursor")]
    fn test_reading_traps() {
        let c: Empty<u8> = Empty::new();
        let _ = c.current();
    }

    #[test]
    #[should_panic(expected = "terminated cursor")]
    fn test_advancing_traps() {
        let mut c: Empty<u8> = Empty::new();
        c.advance();
    }
}
