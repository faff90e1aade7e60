use super::{Cursor, OutputCursor};
use crate::lockstep::Advance;

use core::fmt;
use core::marker::PhantomData;

/// A read cursor over a raw contiguous buffer.
///
/// Moving the cursor is plain address arithmetic and never checked. Two
/// cursors are equal when they hold the same address, so the end marker of an
/// `n`-element buffer is the begin cursor advanced by `n` (see
/// [`PtrCursor::add`]).
pub struct PtrCursor<'a, T> {
    ptr: *const T,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> PtrCursor<'a, T> {
    /// Create a cursor at `ptr`.
    ///
    /// # Safety
    ///
    /// Every position this cursor (or a copy of it) is read at must be
    /// properly aligned, initialized, and valid for reads of `T` for the
    /// lifetime `'a`, with no concurrent writes. Positions that are only
    /// compared against, such as an end marker, need not be readable.
    pub unsafe fn new(ptr: *const T) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// The same cursor moved forward by `count` elements.
    pub fn add(self, count: usize) -> Self {
        Self {
            ptr: self.ptr.wrapping_add(count),
            _marker: PhantomData,
        }
    }

    /// The address this cursor currently points at.
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for PtrCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PtrCursor<'_, T> {}

impl<T> PartialEq for PtrCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for PtrCursor<'_, T> {}

impl<T> fmt::Debug for PtrCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PtrCursor").field(&self.ptr).finish()
    }
}

impl<T> Advance for PtrCursor<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.ptr = self.ptr.wrapping_add(1);
    }
}

impl<'a, T> Cursor for PtrCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> Self::Item {
        // SAFETY: the caller of `PtrCursor::new` guarantees every position
        // that is read is valid for `'a`.
        unsafe { &*self.ptr }
    }
}

/// A write cursor over a raw contiguous buffer.
///
/// Writing does not read or drop the previous value at the position, so the
/// buffer may be uninitialized.
pub struct PtrCursorMut<'a, T> {
    ptr: *mut T,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> PtrCursorMut<'a, T> {
    /// Create a cursor at `ptr`.
    ///
    /// # Safety
    ///
    /// Every position this cursor is written at must be properly aligned and
    /// valid for writes of `T` for the lifetime `'a`, and must not be read or
    /// written through any other pointer while the cursor is alive. Values
    /// previously stored there are overwritten without being dropped.
    pub unsafe fn new(ptr: *mut T) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// The address this cursor currently points at.
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }
}

impl<T> fmt::Debug for PtrCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PtrCursorMut").field(&self.ptr).finish()
    }
}

impl<T> Advance for PtrCursorMut<'_, T> {
    #[inline]
    fn advance(&mut self) {
        self.ptr = self.ptr.wrapping_add(1);
    }
}

impl<T> OutputCursor<T> for PtrCursorMut<'_, T> {
    #[inline]
    fn put(&mut self, value: T) {
        // SAFETY: the caller of `PtrCursorMut::new` guarantees every position
        // that is written is valid and exclusively ours.
        unsafe { self.ptr.write(value) }
    }
}
