//! The collaborator an executor posts its tasks to.

use std::fmt;

use crate::executor::Task;

/// A handle to a single-threaded message loop that can run tasks on that loop's thread. The
/// dispatcher decides how its queue is ordered, when tasks run, and when it stops accepting new
/// ones. [`MessageLoop`][crate::event_loop::MessageLoop] is the implementation that comes with
/// this crate.
///
/// The [`Display`][fmt::Display] implementation should be a short, stable description of the
/// dispatcher. It's used to tell which loop refused a task.
pub trait Dispatcher: fmt::Display + Send + Sync {
    /// Post `task` to the loop so it runs on the loop's thread at some later point. This should not
    /// run the task directly, and it should be callable from any thread without blocking.
    ///
    /// Returns `true` if the task has been queued. Returns `false` if the dispatcher no longer
    /// accepts new tasks, usually because the loop is shutting down. The task is dropped in that
    /// case.
    #[must_use]
    fn post(&self, task: Task) -> bool;
}
