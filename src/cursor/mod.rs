//! Position-cursors over input and output sequences.
//!
//! A cursor is a non-owning handle to one position in a sequence. Input
//! cursors implement [`Cursor`] (read the current element), output cursors
//! implement [`OutputCursor`] (write at the current position), and both move
//! forward through [`Advance`]. The end of a sequence is not known to the
//! cursor; loops compare the cursor against an end marker with `PartialEq`.
//!
//! # Cursor kinds
//!
//! - [`SliceCursor`] and [`SliceCursorMut`] walk a borrowed slice and panic if
//!   read or written past its end.
//! - [`PtrCursor`] and [`PtrCursorMut`] walk a raw contiguous buffer. They are
//!   created with `unsafe` constructors and perform no checks at all.
//! - [`BackInserter`] appends to any [`Extend`] collection.
//! - Tuples, arrays and (with the `alloc` feature) `Vec`s of cursors are
//!   cursors themselves, reading one element from each in order.

use crate::lockstep::Advance;

pub(crate) mod array;
mod copied;
mod ptr;
mod sink;
mod slice;
pub(crate) mod tuple;
pub(crate) mod vec;

pub use copied::Copied;
pub use ptr::{PtrCursor, PtrCursorMut};
pub use sink::BackInserter;
pub use slice::{bounds, SliceCursor, SliceCursorMut};
#[cfg(feature = "alloc")]
pub use vec::Items;

/// A position in an input sequence that can be read.
pub trait Cursor: Advance {
    /// The value produced by reading the current position.
    type Item;

    /// Read the element at the current position.
    ///
    /// Reading does not move the cursor; reading twice yields the same
    /// element.
    fn get(&self) -> Self::Item;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn get(&self) -> Self::Item {
        (**self).get()
    }
}

/// A position in an output sequence that can be written.
pub trait OutputCursor<T>: Advance {
    /// Store `value` at the current position.
    fn put(&mut self, value: T);
}

impl<T, O: OutputCursor<T> + ?Sized> OutputCursor<T> for &mut O {
    #[inline]
    fn put(&mut self, value: T) {
        (**self).put(value);
    }
}

/// Extension methods for [`Cursor`].
pub trait CursorExt: Cursor {
    /// Read elements by value instead of by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use lockstep::prelude::*;
    /// use lockstep::cursor::SliceCursor;
    ///
    /// let digits = [4, 2];
    /// let cursor = SliceCursor::begin(&digits).copied();
    /// let value: i32 = cursor.get();
    /// assert_eq!(value, 4);
    /// ```
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Cursor<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied::new(self)
    }
}

impl<C> CursorExt for C where C: Cursor {}
