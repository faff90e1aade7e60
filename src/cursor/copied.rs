use super::Cursor;
use crate::lockstep::Advance;

/// A cursor that copies the elements of an underlying cursor over references.
///
/// This `struct` is created by the [`copied`] method on [`CursorExt`]. See its
/// documentation for more.
///
/// [`copied`]: super::CursorExt::copied
/// [`CursorExt`]: super::CursorExt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Copied<C> {
    inner: C,
}

impl<C> Copied<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Consume the adapter, returning the underlying cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Advance> Advance for Copied<C> {
    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }
}

impl<'a, T, C> Cursor for Copied<C>
where
    C: Cursor<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    #[inline]
    fn get(&self) -> Self::Item {
        *self.inner.get()
    }
}
