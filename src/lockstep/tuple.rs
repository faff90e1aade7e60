use super::Advance;

macro_rules! impl_advance_tuple {
    ($($A:ident)*) => {
        impl<$($A),*> Advance for ($($A,)*)
        where $(
            $A: Advance,
        )* {
            #[inline]
            fn advance(&mut self) {
                let ($($A,)*) = self;
                $( $A.advance(); )*
            }
        }
    };
}

impl_advance_tuple! {}
impl_advance_tuple! { A0 }
impl_advance_tuple! { A0 A1 }
impl_advance_tuple! { A0 A1 A2 }
impl_advance_tuple! { A0 A1 A2 A3 }
impl_advance_tuple! { A0 A1 A2 A3 A4 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 A6 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 A6 A7 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 A6 A7 A8 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 }
impl_advance_tuple! { A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11 }
