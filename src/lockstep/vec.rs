#![cfg(feature = "alloc")]

use super::Advance;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

impl<A> Advance for Vec<A>
where
    A: Advance,
{
    #[inline]
    fn advance(&mut self) {
        for cursor in self.iter_mut() {
            cursor.advance();
        }
    }
}
