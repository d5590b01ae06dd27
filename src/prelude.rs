// Re-export the macros
pub use crate::debug::*;

pub use crate::dispatcher::Dispatcher;
pub use crate::dispatcher_executor::DispatcherExecutor;
pub use crate::error::ExecutorError;
pub use crate::event_loop::{LoopConfig, MessageLoop};
pub use crate::executor::{Executor, Task};
