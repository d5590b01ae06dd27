//! Logger setup for applications using this crate.

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// The environment variable that decides where [`setup_logger()`] sends its output.
pub const LOG_ENV_VAR: &str = "LOOP_EXECUTOR_LOG";

/// Where the log output should go.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(value) if value.is_empty() || value == "stderr" => LogTarget::Stderr,
            Some(path) => LogTarget::File(PathBuf::from(path)),
            None => LogTarget::Stderr,
        }
    }
}

/// Set up the logger so that the `lx_*!()` logging and assertion macros, and anything else using
/// the `log` crate, log to a centralized location. Panics also get logged there once this has been
/// called, including the ones caught on a message loop's thread. This logs everything down to the
/// trace level in debug builds, and only informational messages and up in release builds.
///
/// The output location can be controlled by setting the `LOOP_EXECUTOR_LOG` environment variable
/// to:
///
/// - `stderr`, or not setting it at all, in which case the log output gets written to STDERR.
/// - A file path, in which case the output gets appended to the end of that file which will be
///   created if necessary. If the file cannot be opened then this falls back to STDERR.
///
/// Calling this more than once does nothing, and neither does calling it after another logger has
/// already been installed.
pub fn setup_logger() {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    let target = LogTarget::from_env_value(std::env::var_os(LOG_ENV_VAR));
    let (logger, file_error) = open_logger(&target, log_level, logger_config());
    if CombinedLogger::init(vec![logger]).is_err() {
        return;
    }

    log_panics::init();

    match (&target, file_error) {
        (LogTarget::File(path), Some(err)) => lx_warn!(
            "Could not open '{}' for logging, logging to STDERR instead: {}",
            path.display(),
            err
        ),
        (LogTarget::File(path), None) => lx_log!("Logging to '{}'", path.display()),
        (LogTarget::Stderr, _) => lx_log!("Logging to STDERR"),
    }
}

fn logger_config() -> Config {
    // The thread name matters here, since tasks are expected to run on a loop's thread
    ConfigBuilder::new()
        .set_thread_level(LevelFilter::Error)
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Create the logger for `target`. If a log file cannot be opened then this returns a STDERR
/// logger together with the reason the file could not be used.
fn open_logger(
    target: &LogTarget,
    log_level: LevelFilter,
    config: Config,
) -> (Box<dyn SharedLogger>, Option<io::Error>) {
    let stderr_logger = |config: Config| -> Box<dyn SharedLogger> {
        TermLogger::new(log_level, config, TerminalMode::Stderr, ColorChoice::Auto)
    };

    match target {
        LogTarget::File(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let logger: Box<dyn SharedLogger> = WriteLogger::new(log_level, config, file);
                (logger, None)
            }
            Err(err) => (stderr_logger(config), Some(err)),
        },
        LogTarget::Stderr => (stderr_logger(config), None),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn unset_logs_to_stderr() {
        assert_eq!(LogTarget::from_env_value(None), LogTarget::Stderr);
    }

    #[test]
    fn stderr_and_empty_log_to_stderr() {
        assert_eq!(
            LogTarget::from_env_value(Some(OsString::from("stderr"))),
            LogTarget::Stderr
        );
        assert_eq!(
            LogTarget::from_env_value(Some(OsString::new())),
            LogTarget::Stderr
        );
    }

    #[test]
    fn anything_else_is_a_file() {
        assert_eq!(
            LogTarget::from_env_value(Some(OsString::from("/tmp/loop-executor.log"))),
            LogTarget::File(PathBuf::from("/tmp/loop-executor.log"))
        );
    }

    #[test]
    fn log_file_is_created() {
        let path = std::env::temp_dir().join(format!(
            "loop-executor-logging-test-{}.log",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let (logger, file_error) = open_logger(
            &LogTarget::File(path.clone()),
            LevelFilter::Info,
            logger_config(),
        );

        assert!(file_error.is_none());
        assert_eq!(logger.level(), LevelFilter::Info);
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unopenable_log_file_falls_back_to_stderr() {
        let path = std::env::temp_dir()
            .join(format!("loop-executor-missing-{}", std::process::id()))
            .join("nested")
            .join("output.log");

        let (logger, file_error) = open_logger(
            &LogTarget::File(path.clone()),
            LevelFilter::Warn,
            logger_config(),
        );

        assert!(file_error.is_some());
        assert_eq!(logger.level(), LevelFilter::Warn);
        assert!(!path.exists());
    }

    #[test]
    fn setting_up_twice_is_harmless() {
        setup_logger();
        setup_logger();

        assert_ne!(log::max_level(), LevelFilter::Off);
    }
}
