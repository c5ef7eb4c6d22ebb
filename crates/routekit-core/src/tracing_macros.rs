//! Logging macros shared by the routekit crates
//!
//! Registration and dispatch events go through these instead of calling
//! `tracing` directly, so that builds without the `tracing` feature carry
//! no logging code at all. The enabled variants resolve `tracing` through
//! this crate, which lets dependent crates log without naming it.

#[doc(hidden)]
#[cfg(feature = "tracing")]
pub mod __private {
    pub use tracing;
}

/// Emit a `warn` event: a route could not be registered.
#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        $crate::__private::tracing::warn!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

/// Emit a `debug` event: route table changes.
#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        $crate::__private::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a `trace` event: per-request decisions other than a plain match.
#[cfg(feature = "tracing")]
#[macro_export]
macro_rules! trace_trace {
    ($($arg:tt)*) => {
        $crate::__private::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_trace {
    ($($arg:tt)*) => {};
}
