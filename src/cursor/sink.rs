use super::OutputCursor;
use crate::lockstep::Advance;

use core::fmt;
use core::iter;

/// An output cursor that appends to a collection.
///
/// Every write extends the collection by one element, so the output never has
/// to be sized up front. Advancing is a no-op: the next write always lands
/// after the previous one.
///
/// # Examples
///
/// ```
/// use lockstep::cursor::{bounds, BackInserter};
/// use lockstep::transform;
///
/// let words = ["lock", "step"];
/// let (mut begin, end) = bounds(&words);
/// let mut out = Vec::new();
/// transform(
///     |w: &&str| w.len(),
///     &mut BackInserter::new(&mut out),
///     &mut begin,
///     &end,
///     (),
/// );
/// assert_eq!(out, [4, 4]);
/// ```
pub struct BackInserter<'a, C: ?Sized> {
    collection: &'a mut C,
}

impl<'a, C: ?Sized> BackInserter<'a, C> {
    /// Append to `collection`.
    pub fn new(collection: &'a mut C) -> Self {
        Self { collection }
    }
}

impl<C: fmt::Debug + ?Sized> fmt::Debug for BackInserter<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BackInserter").field(&self.collection).finish()
    }
}

impl<C: ?Sized> Advance for BackInserter<'_, C> {
    #[inline]
    fn advance(&mut self) {}
}

impl<T, C> OutputCursor<T> for BackInserter<'_, C>
where
    C: Extend<T> + ?Sized,
{
    #[inline]
    fn put(&mut self, value: T) {
        self.collection.extend(iter::once(value));
    }
}
