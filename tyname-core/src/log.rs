//! Logging macros that abstract `tracing`.
//!
//! Without the `tracing` feature the macros expand to nothing. Since these macros are internal
//! API, we only have ones that we need.

// Re-export the logging crate so macros can use it.
#[doc(hidden)]
#[cfg(feature = "tracing")]
pub use tracing;

#[doc(hidden)]
#[macro_export]
#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    }
}
#[doc(hidden)]
#[macro_export]
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[doc(hidden)]
#[macro_export]
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log::tracing::trace!($($arg)*)
    }
}
#[doc(hidden)]
#[macro_export]
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
