#[macro_use]
pub mod debug;

/// Everything you'd need to use this crate. Import this with `use loop_executor::prelude::*;`.
pub mod prelude;

pub mod dispatcher;
pub mod dispatcher_executor;
pub mod error;
pub mod event_loop;
pub mod executor;
pub mod logging;

// The logging macros refer to this as `$crate::log`
#[doc(hidden)]
pub use log;
