// Library exports for the ttyhop binary and its integration tests.
//
// The hop engine (`hop`, `neighbor`) depends on the window system only
// through `platform::WindowSystem` and on tmux only through
// `ttyhop_tmux::CommandRunner`, so both can be replaced with fakes.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod geometry;
pub mod hop;
pub mod neighbor;
pub mod platform;
pub mod shell_integration;
pub mod version;

pub use hop::{HopError, HopOptions, HopOutcome, Hopper};
pub use ttyhop_config::Direction;
