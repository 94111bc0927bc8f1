//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields, and by `Config::default()`.

/// How long to wait for the newly focused window's tmux client, in ms.
pub fn edge_wait_ms() -> u64 {
    200
}

/// Sleep between tmux client polls while landing on an edge pane, in ms.
pub fn poll_interval_ms() -> u64 {
    25
}

pub fn edge_landing() -> bool {
    true
}

pub fn tmux_path() -> String {
    "tmux".to_string()
}

pub fn terminal_bundle_ids() -> Vec<String> {
    vec!["org.alacritty".to_string(), "io.alacritty".to_string()]
}

pub fn terminal_names() -> Vec<String> {
    vec!["Alacritty".to_string()]
}
