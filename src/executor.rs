//! The generic capability for handing off work to be run later.
//!
//! Code written against [`Executor`] doesn't need to know where or when its tasks end up running.
//! [`DispatcherExecutor`][crate::dispatcher_executor::DispatcherExecutor] connects this capability
//! to a [`Dispatcher`][crate::dispatcher::Dispatcher].

use std::sync::Arc;

use crate::error::ExecutorError;

/// A unit of work that takes no arguments and produces no result. This is boxed so [`Executor`]
/// stays object safe.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that accepts [`Task`]s for execution at some later point.
pub trait Executor: Send + Sync {
    /// Hand `task` off for later execution. This does not wait for the task to run. An error is
    /// returned if the task was not accepted, in which case the task has been dropped without
    /// running.
    fn execute(&self, task: Task) -> Result<(), ExecutorError>;

    /// The same as [`execute()`][Self::execute()], but this boxes the closure for you.
    fn spawn<F>(&self, f: F) -> Result<(), ExecutorError>
    where
        F: FnOnce() + Send + 'static,
        Self: Sized,
    {
        self.execute(Box::new(f))
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn execute(&self, task: Task) -> Result<(), ExecutorError> {
        (**self).execute(task)
    }
}

impl<E: Executor + ?Sized> Executor for &E {
    fn execute(&self, task: Task) -> Result<(), ExecutorError> {
        (**self).execute(task)
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    /// Runs everything inline, only for testing the trait plumbing.
    struct Inline;

    impl Executor for Inline {
        fn execute(&self, task: Task) -> Result<(), ExecutorError> {
            task();
            Ok(())
        }
    }

    #[test]
    fn executor_is_object_safe() {
        let _x: &dyn Executor = &Inline;
    }

    #[test]
    fn spawn_boxes_and_forwards() {
        let ran = Arc::new(Mutex::new(Vec::new()));

        let executor = Inline;
        executor
            .spawn({
                let ran = ran.clone();
                move || ran.lock().push("spawned")
            })
            .unwrap();

        assert_eq!(*ran.lock(), vec!["spawned"]);
    }

    #[test]
    fn shared_handles_forward() {
        let ran = Arc::new(Mutex::new(0));

        let executor: Arc<dyn Executor> = Arc::new(Inline);
        for _ in 0..3 {
            let ran = ran.clone();
            executor.execute(Box::new(move || *ran.lock() += 1)).unwrap();
        }
        (&executor)
            .spawn({
                let ran = ran.clone();
                move || *ran.lock() += 1
            })
            .unwrap();

        assert_eq!(*ran.lock(), 4);
    }
}
