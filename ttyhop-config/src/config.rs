//! The `Config` struct and its loading / resolution methods.

use crate::environment::Environment;
use crate::error::ConfigError;
use crate::types::TerminalApp;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration, read from `~/.config/ttyhop/config.yaml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Land on the outer edge pane after a window-level hop
    #[serde(default = "crate::defaults::edge_landing")]
    pub edge_landing: bool,

    /// Poll budget for edge landing, in milliseconds
    #[serde(default = "crate::defaults::edge_wait_ms")]
    pub edge_wait_ms: u64,

    /// Interval between tmux client polls, in milliseconds
    #[serde(default = "crate::defaults::poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// tmux executable, either a bare name searched at runtime or an absolute path
    #[serde(default = "crate::defaults::tmux_path")]
    pub tmux_path: String,

    /// The terminal application whose windows are hop targets
    #[serde(default)]
    pub terminal_app: TerminalApp,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_landing: crate::defaults::edge_landing(),
            edge_wait_ms: crate::defaults::edge_wait_ms(),
            poll_interval_ms: crate::defaults::poll_interval_ms(),
            tmux_path: crate::defaults::tmux_path(),
            terminal_app: TerminalApp::default(),
        }
    }
}

impl Config {
    /// Load the user configuration, falling back to defaults.
    ///
    /// A missing file is normal. An unreadable or malformed file is logged
    /// and ignored so that a broken config never blocks a hop.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("no config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::debug!("loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("ignoring config {:?}: {e}", path);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific YAML file.
    ///
    /// An empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml_ng::from_str(&contents)?;
        Ok(config)
    }

    /// Get the configuration file path (XDG convention on every platform).
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory, `~/.config/ttyhop`.
    pub fn config_dir() -> PathBuf {
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("ttyhop")
        } else {
            PathBuf::from(".")
        }
    }

    /// Resolve the edge-landing poll budget.
    ///
    /// Precedence: a positive command-line value, then a positive
    /// `TTYHOP_EDGE_WAIT_MS`, then the config file (which defaults to 200ms).
    pub fn edge_wait(&self, cli_wait_ms: Option<u64>, env: &Environment) -> Duration {
        let ms = cli_wait_ms
            .filter(|ms| *ms > 0)
            .or(env.edge_wait_ms)
            .unwrap_or(self.edge_wait_ms);
        Duration::from_millis(ms)
    }

    /// Interval between tmux client polls, never shorter than 1ms.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// Resolve the tmux executable path at runtime.
    ///
    /// If the configured path is absolute and exists, use it.
    /// If it's "tmux" (the default), search PATH and common installation locations.
    /// This handles key-binding launchers that run with an incomplete PATH.
    pub fn resolve_tmux_path(&self) -> String {
        let configured = &self.tmux_path;

        if configured.starts_with('/') && Path::new(configured).exists() {
            return configured.clone();
        }

        // If it's not just "tmux", return it and let the OS try
        if configured != "tmux" {
            return configured.clone();
        }

        if let Ok(path_env) = std::env::var("PATH") {
            for dir in path_env.split(':') {
                let candidate = Path::new(dir).join("tmux");
                if candidate.exists() {
                    return candidate.to_string_lossy().to_string();
                }
            }
        }

        let fallback_paths = [
            "/opt/homebrew/bin/tmux", // Homebrew on Apple Silicon
            "/usr/local/bin/tmux",    // Homebrew on Intel / MacPorts
            "/opt/local/bin/tmux",    // MacPorts
            "/usr/bin/tmux",
        ];
        for path in fallback_paths {
            if Path::new(path).exists() {
                return path.to_string();
            }
        }

        configured.clone()
    }
}
