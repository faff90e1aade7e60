use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// The error returned by [`try_transform`] when the combining function fails.
///
/// Output written before the failure is left in place; this error records how
/// much of it there is.
///
/// [`try_transform`]: crate::try_transform
pub struct TransformError<E> {
    written: usize,
    inner: E,
}

impl<E> TransformError<E> {
    pub(crate) fn new(written: usize, inner: E) -> Self {
        Self { written, inner }
    }

    /// How many elements were written before the failing element.
    ///
    /// This is also how many times every cursor was advanced.
    pub fn written(&self) -> usize {
        self.written
    }

    /// The error returned by the combining function.
    pub fn get_ref(&self) -> &E {
        &self.inner
    }

    /// Consume this error, returning the combining function's error.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: fmt::Debug> fmt::Debug for TransformError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformError")
            .field("written", &self.written)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<E: fmt::Display> fmt::Display for TransformError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "combining function failed after {} elements: {}",
            self.written, self.inner
        )
    }
}

#[cfg(feature = "std")]
impl<E: Error + 'static> Error for TransformError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = TransformError::new(3, "overflow");
        assert_eq!(
            err.to_string(),
            "combining function failed after 3 elements: overflow"
        );
        assert_eq!(err.written(), 3);
        assert_eq!(err.into_inner(), "overflow");
    }

    #[cfg(feature = "std")]
    #[test]
    fn source() {
        use std::io;

        let err = TransformError::new(0, io::Error::new(io::ErrorKind::Other, "oh no"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "oh no");
    }
}
