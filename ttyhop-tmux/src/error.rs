//! Typed error types for tmux command execution.

use thiserror::Error;

/// A tmux command that did not produce usable output.
///
/// Callers in this crate never escalate these: a failed query simply means
/// the step it belongs to did not produce a result.
#[derive(Debug, Error)]
pub enum TmuxError {
    /// The tmux process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was executed.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// tmux ran but exited unsuccessfully.
    #[error("tmux {command} exited with {status}: {stderr}")]
    Failed {
        /// First argument of the failing command (e.g. `display`).
        command: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// tmux wrote output that is not valid UTF-8.
    #[error("tmux {command} produced non-UTF-8 output")]
    InvalidOutput {
        /// First argument of the failing command.
        command: String,
    },
}
