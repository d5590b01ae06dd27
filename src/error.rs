//! Errors returned when building executors and loops, and when submitting tasks to them.

use snafu::Snafu;

/// Everything that can go wrong in this crate. Tasks that fail while running on a loop's thread
/// are never reported through here.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExecutorError {
    /// An executor was constructed without a dispatcher to post to.
    #[snafu(display("Cannot create an executor without a dispatcher"))]
    MissingDispatcher,

    /// The dispatcher refused to accept a task. `dispatcher` is the dispatcher's [`Display`]
    /// rendering.
    ///
    /// [`Display`]: std::fmt::Display
    #[snafu(display("{dispatcher} is shutting down"))]
    Rejected { dispatcher: String },

    #[snafu(display("Could not spawn the thread for message loop '{name}': {source}"))]
    SpawnLoop {
        name: String,
        source: std::io::Error,
    },
}

impl ExecutorError {
    /// Whether this is the error returned when a dispatcher refused a task.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ExecutorError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_names_the_dispatcher() {
        let err = ExecutorError::Rejected {
            dispatcher: String::from("MessageLoop (ui)"),
        };

        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "MessageLoop (ui) is shutting down");
    }

    #[test]
    fn missing_dispatcher_is_not_a_rejection() {
        assert!(!ExecutorError::MissingDispatcher.is_rejection());
    }
}
