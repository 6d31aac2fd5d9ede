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

//! # Primitive Ranges
//!
//! Cursors over existing storage or over other cursors. None of these own
//! their backing storage; the caller keeps it alive for the cursor's
//! lifetime.
//!
//! ## Submodules
//!
//! - `ptr`: Unsafe raw-pointer range (`PtrCursor<T>`); the termination flag
//!   is pointer non-nullness, the caller bounds traversal externally.
//! - `slice`: Safe slice-backed ranges (`SliceCursor`, `SliceCursorMut`)
//!   with the full capability ladder on the shared form.
//! - `interval`: Endpoint-bounded range (`Interval<I>`) wrapping a cursor
//!   and a fixed end of the same type.
//! - `counted`: Count-bounded range (`Counted<I>`) and the `take`
//!   constructor.
//! - `cyclic`: Unconditionally non-terminating wraparound range
//!   (`Cyclic<I>`).
//!
//! ## Motivation
//!
//! Each primitive encodes one termination convention: external (pointer),
//! endpoint, count, or none. Combinators in `capstan-adaptors` then compose
//! these without caring which convention bounds the source.

pub mod counted;
pub mod cyclic;
pub mod interval;
pub mod ptr;
pub mod slice;
