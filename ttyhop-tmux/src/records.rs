//! Parsed tmux `list-clients` / `list-panes` rows.

use ttyhop_config::Edge;

/// `list-clients -F` format matching [`ClientRecord::parse_line`].
pub const CLIENT_FORMAT: &str = "#{client_tty} #{client_active} #{client_activity}";

/// `list-panes -F` format matching [`PaneRecord::parse_line`].
pub const PANE_FORMAT: &str = "#{pane_id} #{pane_at_left} #{pane_at_right}";

/// One tmux client attached to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub tty: String,
    pub active: bool,
    /// Unix timestamp of the client's last activity
    pub last_activity: i64,
}

impl ClientRecord {
    /// Parse one `tty active activity` row. Rows with fewer fields are rejected;
    /// an unparseable timestamp counts as 0.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return None;
        }
        Some(Self {
            tty: fields[0].to_string(),
            active: fields[1] == "1",
            last_activity: fields[2].parse().unwrap_or(0),
        })
    }

    /// Parse a full `list-clients` listing, skipping malformed rows.
    pub fn parse_list(output: &str) -> Vec<Self> {
        output.lines().filter_map(Self::parse_line).collect()
    }
}

/// Pick the client whose window should receive the edge landing.
///
/// The first client flagged active wins. Without one, the client with the
/// most recent activity wins; on equal timestamps the earlier row is kept.
pub fn pick_active_client(clients: &[ClientRecord]) -> Option<&ClientRecord> {
    if let Some(active) = clients.iter().find(|c| c.active) {
        return Some(active);
    }

    let mut best: Option<&ClientRecord> = None;
    for client in clients {
        match best {
            Some(b) if client.last_activity <= b.last_activity => {}
            _ => best = Some(client),
        }
    }
    best
}

/// One pane of a tmux window with its outer-edge flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneRecord {
    pub id: String,
    pub at_left_edge: bool,
    pub at_right_edge: bool,
}

impl PaneRecord {
    /// Parse one `id at_left at_right` row. Rows without exactly three fields
    /// are rejected.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, left, right] = fields.as_slice() else {
            return None;
        };
        Some(Self {
            id: id.to_string(),
            at_left_edge: *left == "1",
            at_right_edge: *right == "1",
        })
    }

    /// Parse a full `list-panes` listing, skipping malformed rows.
    pub fn parse_list(output: &str) -> Vec<Self> {
        output.lines().filter_map(Self::parse_line).collect()
    }

    /// Check whether this pane touches the given outer edge.
    pub fn is_at(&self, edge: Edge) -> bool {
        match edge {
            Edge::Left => self.at_left_edge,
            Edge::Right => self.at_right_edge,
        }
    }
}
