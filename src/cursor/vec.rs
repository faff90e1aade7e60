#![cfg(feature = "alloc")]

use super::Cursor;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use smallvec::SmallVec;

/// The elements read from a `Vec` of cursors at one position.
///
/// Up to eight elements are stored inline, so the common small arities never
/// allocate per step.
pub type Items<T> = SmallVec<[T; 8]>;

impl<C> Cursor for Vec<C>
where
    C: Cursor,
{
    type Item = Items<C::Item>;

    #[inline]
    fn get(&self) -> Self::Item {
        self.iter().map(Cursor::get).collect()
    }
}

#[cfg(test)]
mod test {
    use crate::cursor::{Cursor, CursorExt, SliceCursor};
    use crate::lockstep::lockstep;

    #[test]
    fn reads_each_in_order() {
        let rows = vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]];
        let mut cursors: Vec<_> = rows
            .iter()
            .map(|row| SliceCursor::begin(row).copied())
            .collect();
        assert_eq!(cursors.get().as_slice(), [1, 3, 5, 7]);
        lockstep(&mut cursors);
        assert_eq!(cursors.get().as_slice(), [2, 4, 6, 8]);
    }

    #[test]
    fn empty_list() {
        let cursors: Vec<SliceCursor<'_, u8>> = Vec::new();
        assert!(cursors.get().is_empty());
    }
}
