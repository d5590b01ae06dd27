//! A single-threaded message loop for running posted tasks on a dedicated thread. This is the
//! [`Dispatcher`] that comes with this crate, but [`DispatcherExecutor`] works with any other
//! dispatcher just the same.

use crossbeam::channel;
use parking_lot::{Mutex, RwLock};
use snafu::ResultExt;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle, ThreadId};

use crate::dispatcher::Dispatcher;
use crate::dispatcher_executor::DispatcherExecutor;
use crate::error::{ExecutorError, SpawnLoopSnafu};
use crate::executor::Task;

mod config;

pub use self::config::LoopConfig;

/// A message loop running on its own thread. Tasks posted to the loop run one at a time, in the
/// order they were posted, on that thread. Posting never blocks and never runs the task directly,
/// not even when posting from the loop's own thread.
///
/// The loop keeps running until [`quit()`][Self::quit()] or [`quit_safely()`][Self::quit_safely()]
/// is called, or until it gets dropped. From that point on every post is refused, and that is the
/// only reason a post is ever refused. The queue itself is unbounded.
pub struct MessageLoop {
    name: String,

    /// The ID of the thread the tasks run on.
    loop_thread_id: ThreadId,
    /// The loop's thread. This is taken out of the `Option` when the thread gets joined.
    worker_thread: Mutex<Option<JoinHandle<()>>>,

    /// The sending half of the task queue. This is set to `None` once the loop has been asked to
    /// quit. Dropping the sender lets the worker thread run out the queue and exit.
    tasks_sender: RwLock<Option<channel::Sender<Task>>>,
    /// Set by [`quit()`][Self::quit()] so the worker thread drops the queue instead of running it
    /// out.
    discard_pending: Arc<AtomicBool>,
}

impl MessageLoop {
    /// Spawn the loop's thread and start accepting tasks.
    pub fn new_and_spawn(config: LoopConfig) -> Result<Self, ExecutorError> {
        let (tasks_sender, tasks_receiver) = channel::unbounded();
        let discard_pending = Arc::new(AtomicBool::new(false));
        let join_handle = thread::Builder::new()
            .name(config.name.clone())
            .spawn({
                let discard_pending = discard_pending.clone();
                move || worker_thread(tasks_receiver, discard_pending)
            })
            .context(SpawnLoopSnafu { name: &config.name })?;

        lx_trace!("Spawned message loop '{}'", config.name);

        Ok(Self {
            name: config.name,
            loop_thread_id: join_handle.thread().id(),
            worker_thread: Mutex::new(Some(join_handle)),
            tasks_sender: RwLock::new(Some(tasks_sender)),
            discard_pending,
        })
    }

    /// An executor that posts its tasks to this loop.
    pub fn executor(self: &Arc<Self>) -> DispatcherExecutor<MessageLoop> {
        DispatcherExecutor::new(self.clone())
    }

    /// The name of the loop and its thread.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the calling thread is this loop's thread.
    pub fn is_loop_thread(&self) -> bool {
        thread::current().id() == self.loop_thread_id
    }

    /// Whether the loop has been asked to quit. Posts are refused from that point on.
    pub fn is_quitting(&self) -> bool {
        self.tasks_sender.read().is_none()
    }

    /// Stop accepting new tasks and throw away every task that hasn't started running yet. A task
    /// that's currently running is allowed to finish.
    pub fn quit(&self) {
        self.discard_pending.store(true, Ordering::SeqCst);
        if self.tasks_sender.write().take().is_some() {
            lx_trace!("{} is quitting, discarding pending tasks", self);
        }
    }

    /// Stop accepting new tasks. Tasks that have already been accepted will still run, after
    /// which the loop's thread exits.
    pub fn quit_safely(&self) {
        if self.tasks_sender.write().take().is_some() {
            lx_trace!("{} is quitting after running the pending tasks", self);
        }
    }

    /// Wait for the loop's thread to exit. This only returns once the loop has been asked to quit
    /// and its queue has been dealt with, so this should be preceded by a call to
    /// [`quit()`][Self::quit()] or [`quit_safely()`][Self::quit_safely()]. Calling this from the
    /// loop's own thread is a programming error, and does nothing.
    pub fn join(&self) {
        if self.is_loop_thread() {
            lx_debug_assert_failure!("Tried to join {} from its own thread", self);
            return;
        }

        self.join_worker();
    }

    fn join_worker(&self) {
        // The lock is held while joining so concurrent callers all wait for the thread to exit
        let mut worker_thread = self.worker_thread.lock();
        if let Some(join_handle) = worker_thread.take() {
            if join_handle.join().is_err() {
                lx_error!("The thread for {} panicked", self);
            }
        }
    }
}

impl Dispatcher for MessageLoop {
    fn post(&self, task: Task) -> bool {
        match &*self.tasks_sender.read() {
            // This can only fail if the loop's thread is gone
            Some(tasks_sender) => tasks_sender.send(task).is_ok(),
            None => false,
        }
    }
}

impl fmt::Display for MessageLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageLoop ({})", self.name)
    }
}

impl fmt::Debug for MessageLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageLoop")
            .field("name", &self.name)
            .field("loop_thread_id", &self.loop_thread_id)
            .field("quitting", &self.is_quitting())
            .finish()
    }
}

impl Drop for MessageLoop {
    fn drop(&mut self) {
        self.quit_safely();
        // If the last reference is dropped from within a task then the thread is left to exit on
        // its own
        if !self.is_loop_thread() {
            self.join_worker();
        }
    }
}

/// The loop's thread. Runs tasks until every sender is gone and the queue is empty, or until
/// `discard_pending` is set. Panicking tasks are reported by the panic hook, see
/// [`setup_logger()`][crate::logging::setup_logger()].
fn worker_thread(tasks_receiver: channel::Receiver<Task>, discard_pending: Arc<AtomicBool>) {
    for task in tasks_receiver.iter() {
        if discard_pending.load(Ordering::SeqCst) {
            lx_trace!("Discarding the remaining tasks");
            return;
        }

        run_task(task);
    }

    lx_trace!("All senders are gone, shutting down the message loop");
}

/// Run a single task, returning `false` if it panicked. A panicking task should not take the rest
/// of the queue down with it.
fn run_task(task: Task) -> bool {
    let completed = panic::catch_unwind(AssertUnwindSafe(task)).is_ok();
    if !completed {
        lx_trace!("Continuing with the next task after a panic");
    }

    completed
}
