use super::Cursor;

use core::array;

impl<C, const N: usize> Cursor for [C; N]
where
    C: Cursor,
{
    type Item = [C::Item; N];

    #[inline]
    fn get(&self) -> Self::Item {
        array::from_fn(|i| self[i].get())
    }
}
