//! Crate-internal logging macros.
//!
//! With the `tracing` feature enabled these forward to the `tracing` crate;
//! without it they expand to nothing and the arguments are not evaluated.

/// Emits a `debug`-level structured event.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

/// Emits a `trace`-level structured event for per-element work.
macro_rules! trace_detail {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_detail;
pub(crate) use trace_event;
