//! Snapshot of the process environment variables ttyhop reads.
//!
//! The environment is read exactly once at invocation start. Components
//! receive the resulting values instead of calling `std::env` themselves,
//! which keeps them deterministic under test.

/// Set by tmux inside every pane of a session.
pub const TMUX_VAR: &str = "TMUX";
/// Overrides the edge-landing poll budget (positive integer, milliseconds).
pub const EDGE_WAIT_VAR: &str = "TTYHOP_EDGE_WAIT_MS";
/// Enables verbose logging when set to `1`.
pub const LOG_VAR: &str = "TTYHOP_LOG";

/// Values read from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Whether this process runs inside a tmux session
    pub in_tmux: bool,
    /// Poll budget override from `TTYHOP_EDGE_WAIT_MS`, if positive
    pub edge_wait_ms: Option<u64>,
    /// Whether `TTYHOP_LOG=1` requested verbose logging
    pub log_enabled: bool,
}

impl Environment {
    /// Read the real process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build an environment snapshot from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let in_tmux = lookup(TMUX_VAR).is_some_and(|v| !v.is_empty());

        let edge_wait_ms = lookup(EDGE_WAIT_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0);

        let log_enabled = lookup(LOG_VAR).is_some_and(|v| v == "1");

        Self {
            in_tmux,
            edge_wait_ms,
            log_enabled,
        }
    }
}
