//! Edge-pane landing after a window-level hop.
//!
//! Raising a window is asynchronous with respect to tmux's idea of the
//! active client, and tmux has no notification for that change. The lander
//! therefore polls with a bounded budget until a client can be identified,
//! then selects the pane on the far edge of that client's current window.
//! Running out of budget is not an error: the window hop already happened.

use crate::records::{CLIENT_FORMAT, ClientRecord, PANE_FORMAT, PaneRecord, pick_active_client};
use crate::runner::CommandRunner;
use std::time::Duration;
use ttyhop_config::Direction;

/// Result of one landing attempt. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingOutcome {
    /// `select-pane -t <pane>` was issued for this pane
    Landed { pane_id: String },
    /// A client window was found but no pane sits on the landing edge
    NoEdgePane,
    /// The budget ran out before a client window could be identified
    TimedOut { polls: u64 },
}

/// Polls tmux for the active client and selects its edge pane.
pub struct EdgeLander<'a, R: CommandRunner> {
    runner: &'a R,
    poll_interval: Duration,
    default_budget: Duration,
}

impl<'a, R: CommandRunner> EdgeLander<'a, R> {
    /// Default sleep between polls.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(25);
    /// Default poll budget.
    pub const DEFAULT_BUDGET: Duration = Duration::from_millis(200);

    pub fn new(runner: &'a R) -> Self {
        Self {
            runner,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            default_budget: Self::DEFAULT_BUDGET,
        }
    }

    /// Override the sleep between polls (clamped to at least 1ms).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Override the budget used when [`Self::land_on_edge`] gets `None`.
    pub fn with_default_budget(mut self, budget: Duration) -> Self {
        self.default_budget = budget;
        self
    }

    /// Number of polls that fit in `budget`. Zero when the budget is shorter
    /// than one interval.
    pub fn poll_count(&self, budget: Duration) -> u64 {
        let interval_ms = self.poll_interval.as_millis().max(1);
        (budget.as_millis() / interval_ms) as u64
    }

    /// Land on the pane at the edge opposite to the hop `direction`.
    ///
    /// Moving east lands on the window's leftmost pane; moving west lands on
    /// its rightmost pane.
    pub fn land_on_edge(&self, direction: Direction, budget: Option<Duration>) -> LandingOutcome {
        let budget = budget.unwrap_or(self.default_budget);
        let polls = self.poll_count(budget);
        log::debug!("using edge wait: {}ms ({polls} polls)", budget.as_millis());

        for _ in 0..polls {
            std::thread::sleep(self.poll_interval);

            let Some(tty) = self.active_client_tty() else {
                continue;
            };

            let window = match self.runner.run(&["display", "-p", "-t", &tty, "#{window_id}"]) {
                Ok(w) if !w.trim().is_empty() => w.trim().to_string(),
                Ok(_) => continue,
                Err(e) => {
                    log::debug!("tmux: window query for client {tty} failed: {e}");
                    continue;
                }
            };

            let listing = match self.runner.run(&["list-panes", "-t", &window, "-F", PANE_FORMAT]) {
                Ok(l) if !l.trim().is_empty() => l,
                Ok(_) => continue,
                Err(e) => {
                    log::debug!("tmux: list-panes for {window} failed: {e}");
                    continue;
                }
            };

            let edge = direction.landing_edge();
            let panes = PaneRecord::parse_list(&listing);
            let Some(target) = panes.iter().find(|p| p.is_at(edge)) else {
                log::debug!("tmux: no {} pane in window {window}", edge.label());
                return LandingOutcome::NoEdgePane;
            };

            // Best effort: the landing counts even if the select fails
            if let Err(e) = self.runner.run(&["select-pane", "-t", &target.id]) {
                log::debug!("tmux: select-pane -t {} failed: {e}", target.id);
            }
            log::debug!("tmux: landed on edge pane {} ({})", target.id, edge.label());
            return LandingOutcome::Landed {
                pane_id: target.id.clone(),
            };
        }

        LandingOutcome::TimedOut { polls }
    }

    fn active_client_tty(&self) -> Option<String> {
        let listing = match self.runner.run(&["list-clients", "-F", CLIENT_FORMAT]) {
            Ok(l) => l,
            Err(e) => {
                log::debug!("tmux: list-clients failed: {e}");
                return None;
            }
        };
        let clients = ClientRecord::parse_list(&listing);
        pick_active_client(&clients)
            .map(|c| c.tty.clone())
            .filter(|tty| !tty.trim().is_empty())
    }
}
