//! Value types shared between the window-level and tmux-level hop paths.

use serde::{Deserialize, Serialize};

/// Horizontal hop direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move focus to the left
    West,
    /// Move focus to the right
    East,
}

impl Direction {
    /// Lowercase compass name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::East => "east",
        }
    }

    /// The pane edge that lies *in* this direction.
    ///
    /// A pane sitting on this edge has no further neighbor pane that way.
    pub fn outer_edge(self) -> Edge {
        match self {
            Direction::West => Edge::Left,
            Direction::East => Edge::Right,
        }
    }

    /// The pane edge to land on after crossing into a new window.
    ///
    /// Moving east enters the new window from its left side, so repeated
    /// eastward hops step rightward through the panes.
    pub fn landing_edge(self) -> Edge {
        match self {
            Direction::West => Edge::Right,
            Direction::East => Edge::Left,
        }
    }

    /// `select-pane` flag that moves one pane in this direction.
    pub fn select_flag(self) -> &'static str {
        match self {
            Direction::West => "-L",
            Direction::East => "-R",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Left or right outer edge of a tmux window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// tmux format variable that reports `1` when a pane touches this edge.
    pub fn format_flag(self) -> &'static str {
        match self {
            Edge::Left => "#{pane_at_left}",
            Edge::Right => "#{pane_at_right}",
        }
    }

    /// Uppercase label used in log output.
    pub fn label(self) -> &'static str {
        match self {
            Edge::Left => "LEFTMOST",
            Edge::Right => "RIGHTMOST",
        }
    }
}

/// Identity of the one terminal application whose windows ttyhop hops between.
///
/// A running application matches when its bundle identifier is listed in
/// `bundle_ids` or its display name is listed in `names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalApp {
    #[serde(default = "crate::defaults::terminal_bundle_ids")]
    pub bundle_ids: Vec<String>,
    #[serde(default = "crate::defaults::terminal_names")]
    pub names: Vec<String>,
}

impl TerminalApp {
    /// Check whether an application with the given identity is the terminal.
    pub fn matches(&self, bundle_id: &str, name: &str) -> bool {
        (!bundle_id.is_empty() && self.bundle_ids.iter().any(|b| b == bundle_id))
            || (!name.is_empty() && self.names.iter().any(|n| n == name))
    }
}

impl Default for TerminalApp {
    fn default() -> Self {
        Self {
            bundle_ids: crate::defaults::terminal_bundle_ids(),
            names: crate::defaults::terminal_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_edges() {
        assert_eq!(Direction::East.outer_edge(), Edge::Right);
        assert_eq!(Direction::West.outer_edge(), Edge::Left);
        assert_eq!(Direction::East.landing_edge(), Edge::Left);
        assert_eq!(Direction::West.landing_edge(), Edge::Right);
        assert_eq!(Direction::East.select_flag(), "-R");
        assert_eq!(Direction::West.select_flag(), "-L");
    }

    #[test]
    fn test_default_terminal_app_matches_alacritty() {
        let app = TerminalApp::default();
        assert!(app.matches("org.alacritty", ""));
        assert!(app.matches("io.alacritty", "whatever"));
        assert!(app.matches("", "Alacritty"));
        assert!(!app.matches("com.apple.Terminal", "Terminal"));
        assert!(!app.matches("", ""));
    }
}
