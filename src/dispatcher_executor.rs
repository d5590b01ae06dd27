//! An [`Executor`] that posts all of its tasks onto a [`Dispatcher`].

use snafu::OptionExt;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::dispatcher::Dispatcher;
use crate::error::{ExecutorError, MissingDispatcherSnafu, RejectedSnafu};
use crate::executor::{Executor, Task};

/// An adapter [`Executor`] that posts every task it's given onto a single [`Dispatcher`]. The
/// tasks then run on the dispatcher's loop thread, in whatever order the dispatcher decides.
///
/// This holds nothing but a reference to the dispatcher, so it can be cloned and shared between
/// threads freely. Multiple executors can wrap the same dispatcher. Dropping the executor does not
/// affect the dispatcher.
pub struct DispatcherExecutor<D: ?Sized> {
    dispatcher: Arc<D>,
}

impl<D: Dispatcher + ?Sized> DispatcherExecutor<D> {
    /// Create an executor that posts to `dispatcher`.
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self { dispatcher }
    }

    /// Create an executor from a weak reference to a dispatcher. This fails with
    /// [`ExecutorError::MissingDispatcher`] if the dispatcher has already been dropped.
    pub fn from_weak(dispatcher: &Weak<D>) -> Result<Self, ExecutorError> {
        Self::try_from(dispatcher.upgrade())
    }

    /// The dispatcher this executor posts to.
    pub fn dispatcher(&self) -> &Arc<D> {
        &self.dispatcher
    }
}

/// Fails with [`ExecutorError::MissingDispatcher`] when there is no dispatcher.
impl<D: Dispatcher + ?Sized> TryFrom<Option<Arc<D>>> for DispatcherExecutor<D> {
    type Error = ExecutorError;

    fn try_from(dispatcher: Option<Arc<D>>) -> Result<Self, Self::Error> {
        dispatcher.map(Self::new).context(MissingDispatcherSnafu)
    }
}

impl<D: Dispatcher + ?Sized> Executor for DispatcherExecutor<D> {
    fn execute(&self, task: Task) -> Result<(), ExecutorError> {
        if self.dispatcher.post(task) {
            Ok(())
        } else {
            lx_trace!("{} refused a task", self.dispatcher);
            RejectedSnafu {
                dispatcher: self.dispatcher.to_string(),
            }
            .fail()
        }
    }
}

impl<D: ?Sized> Clone for DispatcherExecutor<D> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<D: Dispatcher + ?Sized> fmt::Debug for DispatcherExecutor<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatcherExecutor")
            .field("dispatcher", &format_args!("{}", self.dispatcher))
            .finish()
    }
}
