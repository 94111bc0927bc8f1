//! Synchronous "run tmux, capture stdout" primitive.

use crate::error::TmuxError;
use std::process::{Command, Stdio};

/// Runs one tmux command and returns its trimmed standard output.
///
/// Implementations are blocking and never retry. Any error means "this
/// query is unavailable right now"; callers decide what that implies.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError>;
}

impl<F> CommandRunner for F
where
    F: Fn(&[&str]) -> Result<String, TmuxError>,
{
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        self(args)
    }
}

/// [`CommandRunner`] that spawns the real tmux executable.
#[derive(Debug, Clone)]
pub struct TmuxRunner {
    program: String,
}

impl TmuxRunner {
    /// Create a runner for the given tmux executable path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this runner spawns.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for TmuxRunner {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl CommandRunner for TmuxRunner {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let command = args.first().copied().unwrap_or_default().to_string();

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TmuxError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TmuxError::Failed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|_| TmuxError::InvalidOutput { command })?;
        Ok(stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_runner() {
        let runner = |args: &[&str]| -> Result<String, TmuxError> { Ok(args.join(" ")) };
        assert_eq!(
            runner.run(&["display", "-p", "#{pane_id}"]).expect("run"),
            "display -p #{pane_id}"
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = TmuxRunner::new("/nonexistent/ttyhop-test/tmux");
        let err = runner.run(&["display", "-p", "#{pane_id}"]).unwrap_err();
        assert!(matches!(err, TmuxError::Spawn { .. }));
    }
}
