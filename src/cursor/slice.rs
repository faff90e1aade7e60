use super::{Cursor, OutputCursor};
use crate::lockstep::Advance;

use core::fmt;
use core::ptr;

/// A read cursor over a borrowed slice.
///
/// Two slice cursors are equal when they point into the same slice at the same
/// index, so the end marker of a slice is [`SliceCursor::end`] of that slice.
/// Reading at or past the end of the slice panics.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor at the first element of `slice`.
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// A cursor one past the last element of `slice`.
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// The index this cursor currently points at.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// The `(begin, end)` cursor pair spanning all of `slice`.
///
/// # Examples
///
/// ```
/// use lockstep::cursor::bounds;
///
/// let (begin, end) = bounds(&[1, 2, 3]);
/// assert_eq!(end.position() - begin.position(), 3);
/// ```
pub fn bounds<T>(slice: &[T]) -> (SliceCursor<'_, T>, SliceCursor<'_, T>) {
    (SliceCursor::begin(slice), SliceCursor::end(slice))
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Advance for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> Self::Item {
        &self.slice[self.pos]
    }
}

/// A write cursor over a mutably borrowed slice.
///
/// Writing assigns over the existing element, dropping it. Writing at or past
/// the end of the slice panics.
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// A cursor at the first element of `slice`.
    pub fn begin(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// The index this cursor currently points at.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Advance for SliceCursorMut<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> OutputCursor<T> for SliceCursorMut<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        self.slice[self.pos] = value;
    }
}
