//! The n-ary transform driver.
//!
//! [`transform`] walks a primary input from `begin` to `end`, reading one
//! element from it and one from every auxiliary input at each position,
//! combining them, and writing the result through the output cursor. All
//! cursors then move forward together via [`lockstep`]. Only the primary
//! input has an end marker: every auxiliary input and the output must have
//! at least as many positions left as the primary.
//!
//! [`try_transform`] is the same loop for a combining function that can fail.

use crate::cursor::{Cursor, OutputCursor};
use crate::lockstep::lockstep;
use crate::utils::{debug, trace};

mod combine;
mod error;

use combine::Infallibly;
pub use combine::Combine;
pub use error::TransformError;

/// Combine elements from any number of sequences into one output sequence.
///
/// `operation` receives the element at `begin` followed by one element from
/// each cursor in `aux`, in declaration order. Its result is written through
/// `output`. Then `begin`, `output` and every auxiliary cursor are advanced
/// once, in that order. This repeats until `begin == end`; if they are equal
/// on entry, nothing is read, written, or advanced.
///
/// `aux` is `()` for a single input, a tuple of cursors for up to twelve
/// auxiliary inputs, an array `[C; N]`, or (with the `alloc` feature) a
/// `Vec<C>` when the number of inputs is only known at runtime. Pass `&mut`
/// cursors to observe where they stopped.
///
/// `operation` is matched through the [`Combine`] trait rather than an `Fn`
/// bound, so the compiler cannot infer a closure's parameter types from the
/// cursors. Annotate every parameter: `|a: &i32, b: &i32| a + b` works where
/// `|a, b| a + b` does not.
///
/// # Panics
///
/// Panics raised by `operation` or by a cursor propagate to the caller. Output
/// already written stays written. Slice cursors panic when an auxiliary input
/// or the output is shorter than the primary input.
///
/// # Examples
///
/// ```
/// use lockstep::cursor::{bounds, SliceCursor, SliceCursorMut};
/// use lockstep::transform;
///
/// let digits = [1, 2, 3, 4];
/// let digits_to_sum = [2, 3, 4, 5];
/// let mut result = [0; 4];
///
/// let (mut begin, end) = bounds(&digits);
/// transform(
///     |a: &i32, b: &i32| a + b,
///     &mut SliceCursorMut::begin(&mut result),
///     &mut begin,
///     &end,
///     (SliceCursor::begin(&digits_to_sum),),
/// );
/// assert_eq!(result, [3, 5, 7, 9]);
/// assert_eq!(begin, end);
/// ```
pub fn transform<F, O, P, E, A>(operation: F, output: &mut O, begin: &mut P, end: &E, aux: A)
where
    P: Cursor + PartialEq<E>,
    E: ?Sized,
    A: Cursor,
    F: Combine<P::Item, A::Item>,
    O: OutputCursor<F::Output> + ?Sized,
{
    try_transform(Infallibly(operation), output, begin, end, aux)
        .unwrap_or_else(|err| match err.into_inner() {});
}

/// Combine elements from any number of sequences with a fallible function.
///
/// Behaves like [`transform`] as long as `operation` returns `Ok`. The first
/// `Err` stops the loop immediately: the failing element is not written, no
/// cursor is advanced past it, and the error is returned together with the
/// number of elements written before it.
///
/// # Examples
///
/// ```
/// use lockstep::cursor::{bounds, SliceCursor, SliceCursorMut};
/// use lockstep::try_transform;
///
/// let a = [200u8, 100, 50];
/// let b = [50u8, 200, 0];
/// let mut out = [0u8; 3];
///
/// let (mut begin, end) = bounds(&a);
/// let err = try_transform(
///     |x: &u8, y: &u8| x.checked_add(*y).ok_or("overflow"),
///     &mut SliceCursorMut::begin(&mut out),
///     &mut begin,
///     &end,
///     (SliceCursor::begin(&b),),
/// )
/// .unwrap_err();
///
/// assert_eq!(err.written(), 1);
/// assert_eq!(out, [250, 0, 0]);
/// assert_eq!(begin.position(), 1);
/// ```
pub fn try_transform<F, O, P, E, A, T, Er>(
    mut operation: F,
    output: &mut O,
    begin: &mut P,
    end: &E,
    mut aux: A,
) -> Result<(), TransformError<Er>>
where
    P: Cursor + PartialEq<E>,
    E: ?Sized,
    A: Cursor,
    F: Combine<P::Item, A::Item, Output = Result<T, Er>>,
    O: OutputCursor<T> + ?Sized,
{
    let mut written = 0usize;
    while *begin != *end {
        let value = match operation.combine(begin.get(), aux.get()) {
            Ok(value) => value,
            Err(err) => {
                debug!(written, "combining function failed, stopping transform");
                return Err(TransformError::new(written, err));
            }
        };
        output.put(value);
        lockstep((&mut *begin, &mut *output, &mut aux));
        written += 1;
    }
    trace!(steps = written, "transform finished");
    Ok(())
}
