//! Macros for logging and debug assertions. [`lx_trace!()`] and [`lx_debug_assert_failure!()`]
//! are only really useful in debug builds, so they can be used for asserting additional invariants
//! on the loop thread without affecting release builds. Check [`setup_logger()`] for where the
//! output ends up.
//!
//! [`setup_logger()`]: crate::logging::setup_logger()

// NOTE: `#[macro_export]` exports these macros from the crate root. They're re-exported from this
//       module as well so `use loop_executor::debug::*;` (or the prelude) is enough to use them.

/// Write something to the logger. Where this ends up is decided by the `LOOP_EXECUTOR_LOG`
/// environment variable, see [`setup_logger()`][crate::logging::setup_logger()].
#[macro_export]
macro_rules! lx_log {
    ($($args:tt)*) => (
        $crate::log::info!($($args)*)
    );
}
#[doc(inline)]
pub use lx_log;

/// Similar to `lx_log!()`, but less subtle. Used for printing warnings.
#[macro_export]
macro_rules! lx_warn {
    ($($args:tt)*) => (
        $crate::log::warn!($($args)*)
    );
}
#[doc(inline)]
pub use lx_warn;

/// Similar to `lx_log!()`, but more scream-y. Used for printing fatal errors.
#[macro_export]
macro_rules! lx_error {
    ($($args:tt)*) => (
        $crate::log::error!($($args)*)
    );
}
#[doc(inline)]
pub use lx_error;

/// The same as `lx_log!()`, but at the trace level. The logger only shows these messages in debug
/// builds.
#[macro_export]
macro_rules! lx_trace {
    ($($args:tt)*) => (
        $crate::log::trace!($($args)*)
    );
}
#[doc(inline)]
pub use lx_trace;

/// An unconditional debug assertion failure, for if the condition has already been checked
/// elsewhere. This logs the failure instead of panicking, except during tests where it's upgraded
/// to a regular panicking `debug_assert!()`.
#[macro_export]
macro_rules! lx_debug_assert_failure {
    () => (
        if cfg!(test) {
           debug_assert!(false, "Debug assertion failed");
        } else if cfg!(debug_assertions) {
            $crate::log::warn!("Debug assertion failed");
        }
    );
    ($format:expr $(, $($args:tt)*)?) => (
        if cfg!(test) {
           debug_assert!(false, concat!("Debug assertion failed: ", $format), $($($args)*)?);
        } else if cfg!(debug_assertions) {
            $crate::log::warn!(concat!("Debug assertion failed: ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use lx_debug_assert_failure;
