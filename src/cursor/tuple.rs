use super::Cursor;

macro_rules! impl_cursor_tuple {
    ($($C:ident)*) => {
        impl<$($C),*> Cursor for ($($C,)*)
        where $(
            $C: Cursor,
        )* {
            type Item = ($($C::Item,)*);

            #[inline]
            fn get(&self) -> Self::Item {
                let ($($C,)*) = self;
                ($($C.get(),)*)
            }
        }
    };
}

impl_cursor_tuple! {}
impl_cursor_tuple! { C0 }
impl_cursor_tuple! { C0 C1 }
impl_cursor_tuple! { C0 C1 C2 }
impl_cursor_tuple! { C0 C1 C2 C3 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 C6 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 C6 C7 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 C6 C7 C8 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 C6 C7 C8 C9 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 C6 C7 C8 C9 C10 }
impl_cursor_tuple! { C0 C1 C2 C3 C4 C5 C6 C7 C8 C9 C10 C11 }
