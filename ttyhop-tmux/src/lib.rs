//! tmux integration for ttyhop.
//!
//! Every interaction with tmux goes through a [`CommandRunner`], so the
//! pane-level logic can be driven by a scripted runner in tests.
//!
//! - [`PaneMover`] tries a same-window pane move (the fast path)
//! - [`EdgeLander`] waits for the newly focused window's tmux client and
//!   selects the pane on its outer edge
//! - [`records`] parses `list-clients` / `list-panes` output

pub mod edge_lander;
pub mod error;
pub mod pane_mover;
pub mod records;
pub mod runner;

pub use edge_lander::{EdgeLander, LandingOutcome};
pub use error::TmuxError;
pub use pane_mover::PaneMover;
pub use records::{ClientRecord, PaneRecord, pick_active_client};
pub use runner::{CommandRunner, TmuxRunner};
