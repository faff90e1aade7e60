//! An n-ary `transform`: walk any number of sequences in lockstep, combine the
//! current element of each, and write the result to an output sequence.
//!
//! This generalizes the two-sequence "zip and map" pattern to an arity chosen
//! at the call site. The number of inputs is the arity of the combining
//! function, and a mismatch between the two is a compile error.
//!
//! # Operations
//!
//! - [`transform`]: combine elements from every input into the output, until
//!   the primary input reaches its end marker.
//! - [`try_transform`]: the same, stopping at the first error returned by the
//!   combining function.
//! - [`lockstep::lockstep`]: advance an ordered set of cursors by one step
//!   each.
//!
//! Inputs and outputs are position-cursors (see the [`cursor`] module): slice
//! cursors, raw buffer cursors, an appending [`cursor::BackInserter`], or your
//! own types implementing [`Cursor`] and [`OutputCursor`]. Auxiliary inputs are
//! passed as a tuple, an array, or a `Vec` of cursors.
//!
//! # Examples
//!
//! Sum three sequences element-wise:
//!
//! ```rust
//! use lockstep::prelude::*;
//! use lockstep::cursor::{bounds, SliceCursor, SliceCursorMut};
//!
//! let a = [1, 2, 3];
//! let b = [10, 20, 30];
//! let c = [100, 200, 300];
//! let mut out = [0; 3];
//!
//! let (mut begin, end) = bounds(&a);
//! transform(
//!     |x: &i32, y: &i32, z: &i32| x + y + z,
//!     &mut SliceCursorMut::begin(&mut out),
//!     &mut begin,
//!     &end,
//!     (SliceCursor::begin(&b), SliceCursor::begin(&c)),
//! );
//! assert_eq!(out, [111, 222, 333]);
//! ```
//!
//! # Preconditions
//!
//! Only the primary input carries an end marker. Every auxiliary input and the
//! output must have at least as many positions left as the primary input. With
//! slice cursors a violation panics; with raw buffer cursors it is undefined
//! behavior, which is why those are built with `unsafe` constructors.
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`TransformError`].
//! - `alloc`: cursors over a `Vec` of cursors, for runtime arity.
//! - `tracing`: emits `tracing` events when a transform finishes or fails.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;

/// The lockstep prelude.
pub mod prelude {
    pub use super::cursor::Cursor;
    pub use super::cursor::CursorExt as _;
    pub use super::cursor::OutputCursor;
    pub use super::lockstep::Advance;
    pub use super::transform::{transform, try_transform};
}

pub mod cursor;
pub mod lockstep;
pub mod transform;

pub use cursor::{Cursor, OutputCursor};
pub use lockstep::Advance;
pub use transform::{transform, try_transform, Combine, TransformError};
