//! Forwarding macros for the optional `tracing` feature. Without the feature
//! they expand to nothing.

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    }};
}
pub(crate) use trace;

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    }};
}
pub(crate) use debug;
