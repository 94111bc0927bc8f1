//! One directional hop: tmux pane move first, then window-level search.
//!
//! A hop is stateless. Every call starts from scratch, queries the
//! collaborators it needs and ends in either a [`HopOutcome`] or a
//! [`HopError`] whose [`exit_code`](HopError::exit_code) calling scripts
//! can branch on.

use crate::neighbor::NeighborResolver;
use crate::platform::WindowSystem;
use std::time::Duration;
use thiserror::Error;
use ttyhop_config::Direction;
use ttyhop_tmux::{CommandRunner, EdgeLander, LandingOutcome, PaneMover};

/// Exit code for command-line usage errors.
pub const EXIT_USAGE: i32 = 64;

/// Why a window-level hop could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HopError {
    #[error("front app is not the terminal application")]
    UnsupportedApp,
    #[error("no focused window")]
    NoFocusedWindow,
    #[error("cannot read current window rect")]
    GeometryUnavailable,
    #[error("cannot list windows")]
    WindowListUnavailable,
    #[error("no neighbor window in that direction")]
    NoEligibleNeighbor,
    #[error("could not obtain front app")]
    NoFrontApp,
    #[error("accessibility not trusted")]
    PermissionDenied,
}

impl HopError {
    /// Stable process exit code for this failure.
    pub fn exit_code(self) -> i32 {
        match self {
            HopError::UnsupportedApp => 1,
            HopError::NoFocusedWindow => 2,
            HopError::GeometryUnavailable => 3,
            HopError::WindowListUnavailable => 4,
            HopError::NoEligibleNeighbor => 5,
            HopError::NoFrontApp => 10,
            HopError::PermissionDenied => 20,
        }
    }
}

/// How a successful hop was carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HopOutcome {
    /// tmux moved to the adjacent pane in the same window
    PaneMoved,
    /// The neighbor terminal window was focused
    WindowHopped {
        /// Index of the neighbor in the application's window list
        neighbor: usize,
        /// Edge landing result, `None` when edge landing is disabled
        landing: Option<LandingOutcome>,
    },
}

/// Knobs resolved from config, environment and command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopOptions {
    pub in_tmux: bool,
    pub edge_landing: bool,
    pub edge_wait: Duration,
    pub poll_interval: Duration,
}

impl Default for HopOptions {
    fn default() -> Self {
        Self {
            in_tmux: false,
            edge_landing: true,
            edge_wait: Duration::from_millis(ttyhop_config::defaults::edge_wait_ms()),
            poll_interval: Duration::from_millis(ttyhop_config::defaults::poll_interval_ms()),
        }
    }
}

/// Runs hops against a window system and a tmux command runner.
pub struct Hopper<'a, S: WindowSystem, R: CommandRunner> {
    windows: &'a S,
    runner: &'a R,
    options: HopOptions,
}

impl<'a, S: WindowSystem, R: CommandRunner> Hopper<'a, S, R> {
    pub fn new(windows: &'a S, runner: &'a R, options: HopOptions) -> Self {
        Self {
            windows,
            runner,
            options,
        }
    }

    /// Move focus one step toward `direction`.
    pub fn hop(&self, direction: Direction) -> Result<HopOutcome, HopError> {
        if PaneMover::new(self.runner, self.options.in_tmux).try_move(direction) {
            log::debug!("tmux: moved pane {}", direction.name());
            return Ok(HopOutcome::PaneMoved);
        }

        let neighbor = self.hop_window(direction)?;

        let landing = if self.options.edge_landing {
            log::debug!("edge landing via tmux");
            let outcome = EdgeLander::new(self.runner)
                .with_poll_interval(self.options.poll_interval)
                .land_on_edge(direction, Some(self.options.edge_wait));
            log::debug!("edge landing: {outcome:?}");
            Some(outcome)
        } else {
            None
        };

        Ok(HopOutcome::WindowHopped { neighbor, landing })
    }

    /// Find and focus the neighbor window. Returns its list index.
    fn hop_window(&self, direction: Direction) -> Result<usize, HopError> {
        let ws = self.windows;

        let trusted = ws.is_trusted();
        log::debug!("trusted={trusted}");
        if !trusted {
            return Err(HopError::PermissionDenied);
        }

        let app = ws.front_app().ok_or(HopError::NoFrontApp)?;
        if let Some(info) = ws.front_app_info() {
            log::debug!(
                "front app: bid={:?} name={:?} ({})",
                info.bundle_id,
                info.name,
                info.source.tag()
            );
        }
        if !ws.is_target_app(&app) {
            return Err(HopError::UnsupportedApp);
        }

        let current = ws.focused_window(&app).ok_or(HopError::NoFocusedWindow)?;
        let current_rect = ws.rect(&current).ok_or(HopError::GeometryUnavailable)?;
        log::debug!(
            "me: mid=({:.1},{:.1}) h={:.1}",
            current_rect.mid_x(),
            current_rect.mid_y(),
            current_rect.height
        );

        let siblings = ws.all_windows(&app).ok_or(HopError::WindowListUnavailable)?;
        log::debug!("{} windows", siblings.len());

        let neighbor = NeighborResolver::new(ws)
            .find_neighbor(&current, &current_rect, &siblings, direction)
            .ok_or(HopError::NoEligibleNeighbor)?;
        log::debug!(
            "focusing window {} ({} by {:.1})",
            neighbor.index,
            direction.name(),
            neighbor.distance
        );

        ws.focus(&app, neighbor.window);
        Ok(neighbor.index)
    }
}
