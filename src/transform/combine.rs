#[cfg(feature = "alloc")]
use crate::cursor::Items;

use core::convert::Infallible;

/// A combining function: one element from the primary input plus the elements
/// read from every auxiliary input, mapped to one output value.
///
/// This is implemented for closures and functions whose parameter list is the
/// primary element followed by the auxiliary elements:
///
/// - auxiliary tuple `(C1, .., Ck)`: `FnMut(Head, T1, .., Tk) -> R` (up to
///   twelve auxiliary inputs, `()` for none),
/// - auxiliary array `[C; N]`: `FnMut(Head, [T; N]) -> R`,
/// - auxiliary `Vec<C>`: `FnMut(Head, Items<T>) -> R`.
///
/// A closure whose arity does not match the number of inputs does not
/// implement this trait, so the mismatch is rejected at compile time.
///
/// Closure parameter types are not inferred through this trait; write them
/// out, as in `|a: &u8, rest: [u8; 2]| ..`.
///
/// ```compile_fail
/// use lockstep::cursor::{bounds, SliceCursor, SliceCursorMut};
/// use lockstep::transform;
///
/// let a = [1, 2];
/// let b = [3, 4];
/// let mut out = [0; 2];
/// let (mut begin, end) = bounds(&a);
/// transform(
///     |x, y| x + y,
///     &mut SliceCursorMut::begin(&mut out),
///     &mut begin,
///     &end,
///     (SliceCursor::begin(&b),),
/// );
/// ```
pub trait Combine<Head, Rest> {
    /// The value written to the output sequence.
    type Output;

    /// Combine the elements read at one position.
    fn combine(&mut self, head: Head, rest: Rest) -> Self::Output;
}

macro_rules! impl_combine_tuple {
    ($($T:ident)*) => {
        impl<F, R, H, $($T),*> Combine<H, ($($T,)*)> for F
        where
            F: FnMut(H, $($T),*) -> R,
        {
            type Output = R;

            #[inline]
            fn combine(&mut self, head: H, rest: ($($T,)*)) -> R {
                let ($($T,)*) = rest;
                self(head, $($T),*)
            }
        }
    };
}

impl_combine_tuple! {}
impl_combine_tuple! { T0 }
impl_combine_tuple! { T0 T1 }
impl_combine_tuple! { T0 T1 T2 }
impl_combine_tuple! { T0 T1 T2 T3 }
impl_combine_tuple! { T0 T1 T2 T3 T4 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 T6 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 T6 T7 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 T6 T7 T8 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 }
impl_combine_tuple! { T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 }

impl<F, R, H, T, const N: usize> Combine<H, [T; N]> for F
where
    F: FnMut(H, [T; N]) -> R,
{
    type Output = R;

    #[inline]
    fn combine(&mut self, head: H, rest: [T; N]) -> R {
        self(head, rest)
    }
}

#[cfg(feature = "alloc")]
impl<F, R, H, T> Combine<H, Items<T>> for F
where
    F: FnMut(H, Items<T>) -> R,
{
    type Output = R;

    #[inline]
    fn combine(&mut self, head: H, rest: Items<T>) -> R {
        self(head, rest)
    }
}

/// Lifts an infallible combining function into one returning `Result`, so
/// `transform` and `try_transform` share one loop.
#[derive(Debug)]
pub(crate) struct Infallibly<F>(pub(crate) F);

impl<F, H, Rest> Combine<H, Rest> for Infallibly<F>
where
    F: Combine<H, Rest>,
{
    type Output = Result<F::Output, Infallible>;

    #[inline]
    fn combine(&mut self, head: H, rest: Rest) -> Self::Output {
        Ok(self.0.combine(head, rest))
    }
}

#[cfg(test)]
mod test {
    use super::Combine;

    fn sum3(a: u8, b: u8, c: u8) -> u8 {
        a + b + c
    }

    #[test]
    fn spreads_tuple() {
        let mut f = |a: i32| a * 2;
        assert_eq!(f.combine(4, ()), 8);

        let mut g = |a: i32, b: &str, c: char| format!("{a}{b}{c}");
        assert_eq!(g.combine(1, ("x", 'y')), "1xy");

        assert_eq!(Combine::combine(&mut sum3, 1, (2, 3)), 6);
    }

    #[test]
    fn passes_array() {
        let mut f = |a: i32, rest: [i32; 3]| a + rest.iter().sum::<i32>();
        assert_eq!(f.combine(1, [2, 3, 4]), 10);
    }

    #[test]
    fn keeps_state() {
        let mut calls = 0;
        let mut f = |a: i32, b: i32| {
            calls += 1;
            a - b
        };
        assert_eq!(f.combine(5, (3,)), 2);
        assert_eq!(f.combine(3, (5,)), -2);
        assert_eq!(calls, 2);
    }
}
