//! Same-window pane moves: the fast path of every hop.

use crate::runner::CommandRunner;
use ttyhop_config::Direction;

/// Attempts to move one tmux pane left or right inside the current window.
///
/// Reports only "moved" or "did not move". Not being in tmux, sitting on the
/// outer edge and a tmux query failing all mean the same thing to the
/// caller: fall through to window-level hopping.
pub struct PaneMover<'a, R: CommandRunner> {
    runner: &'a R,
    in_session: bool,
}

impl<'a, R: CommandRunner> PaneMover<'a, R> {
    /// Create a pane mover. `in_session` is the `TMUX` presence flag.
    pub fn new(runner: &'a R, in_session: bool) -> Self {
        Self { runner, in_session }
    }

    /// Try to move the active pane one step in `direction`.
    pub fn try_move(&self, direction: Direction) -> bool {
        if !self.in_session {
            log::debug!("tmux: not inside a session, skipping pane move");
            return false;
        }

        let Some(old_id) = self.active_pane_id() else {
            return false;
        };

        // pane_at_left/right == 1 means there is no neighbor pane that way
        let edge_flag = direction.outer_edge().format_flag();
        match self.runner.run(&["display", "-p", edge_flag]) {
            Ok(edge) if edge.trim() == "1" => {
                log::debug!("tmux: pane {old_id} is at the {direction} edge");
                return false;
            }
            Ok(_) => {}
            Err(e) => {
                log::debug!("tmux: edge query failed: {e}");
                return false;
            }
        }

        // Relative to the active pane, no -t
        if let Err(e) = self.runner.run(&["select-pane", direction.select_flag()]) {
            log::debug!("tmux: select-pane {} failed: {e}", direction.select_flag());
        }

        match self.active_pane_id() {
            Some(new_id) if new_id != old_id => {
                log::debug!("tmux: pane move {direction} via IPC ({old_id} -> {new_id})");
                true
            }
            _ => {
                log::debug!("tmux: pane move {direction} did not change the active pane");
                false
            }
        }
    }

    fn active_pane_id(&self) -> Option<String> {
        match self.runner.run(&["display", "-p", "#{pane_id}"]) {
            Ok(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
            Ok(_) => None,
            Err(e) => {
                log::debug!("tmux: active pane query failed: {e}");
                None
            }
        }
    }
}
