//! Advance a fixed set of cursors together, one step each.
//!
//! A "list" of cursors is any type implementing [`Advance`]: a single cursor,
//! a `&mut` to one, a tuple, an array, or a `Vec` of them. Tuples nest, so
//! `(primary, output, (a, b))` is itself a list and is advanced as
//! `primary, output, a, b`.

pub(crate) mod array;
pub(crate) mod tuple;
pub(crate) mod vec;

/// Move a position forward by a single element.
///
/// Implementations must not perform bounds checks on behalf of the driver:
/// advancing past the end of a sequence is only an error if the cursor kind
/// says so when it is next read or written.
pub trait Advance {
    /// Step to the position immediately following the current one.
    fn advance(&mut self);
}

impl<A: Advance + ?Sized> Advance for &mut A {
    #[inline]
    fn advance(&mut self) {
        (**self).advance();
    }
}

/// Advance every cursor in `cursors` by exactly one element, left to right.
///
/// Nothing else happens between the individual steps, and nothing is
/// returned. This is the step the transform driver takes after each element;
/// it is public so other lockstep loops can reuse the same ordering.
///
/// # Examples
///
/// ```
/// use lockstep::cursor::{SliceCursor, SliceCursorMut};
/// use lockstep::lockstep::lockstep;
///
/// let input = [1, 2, 3];
/// let mut output = [0; 3];
///
/// let mut a = SliceCursor::begin(&input);
/// let mut b = SliceCursorMut::begin(&mut output);
/// lockstep((&mut a, &mut b));
///
/// assert_eq!(a.position(), 1);
/// assert_eq!(b.position(), 1);
/// ```
#[inline]
pub fn lockstep<L: Advance>(mut cursors: L) {
    cursors.advance();
}
