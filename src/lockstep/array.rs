use super::Advance;

impl<A, const N: usize> Advance for [A; N]
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
