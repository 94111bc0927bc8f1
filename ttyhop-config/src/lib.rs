//! Configuration system for ttyhop.
//!
//! This crate provides:
//!
//! - The optional YAML configuration file and its defaults
//! - A one-shot snapshot of the process environment variables ttyhop reads
//! - Shared value types used by both window-level and tmux-level hopping

pub mod config;
pub mod defaults;
pub mod environment;
pub mod error;
mod types;

pub use config::Config;
pub use environment::Environment;
pub use error::ConfigError;
pub use types::{Direction, Edge, TerminalApp};
