//! Window-system boundary for ttyhop.
//!
//! The hop engine only talks to the host windowing system through the
//! [`WindowSystem`] trait. All calls are synchronous and report failure by
//! returning `None`/`false` instead of erroring.
//!
//! # Contents
//!
//! | Item | Description |
//! |---|---|
//! | [`WindowSystem`] | Collaborator contract used by the hop engine |
//! | [`native`] | The implementation for the current platform |
//! | [`FrontAppInfo`] | Front application identity for `--check` and logs |

#[cfg(target_os = "macos")]
mod macos;
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::{MacApp, MacWindow, MacWindowSystem};
pub use unsupported::UnsupportedWindowSystem;

use crate::geometry::Rect;
use ttyhop_config::TerminalApp;

/// Which source produced the frontmost application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSource {
    /// The running-application list (preferred)
    Workspace,
    /// The legacy accessibility "focused application" attribute
    Accessibility,
}

impl AppSource {
    /// Short tag printed by `--check`.
    pub fn tag(self) -> &'static str {
        match self {
            AppSource::Workspace => "WS",
            AppSource::Accessibility => "AX",
        }
    }
}

/// Identity of the frontmost application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontAppInfo {
    pub bundle_id: String,
    pub name: String,
    pub source: AppSource,
}

/// Host windowing system operations needed for window-level hops.
///
/// Handles are borrowed for one hop and never retained across invocations.
pub trait WindowSystem {
    /// Handle to a running application.
    type App;
    /// Handle to one window of an application. Equality is window identity.
    type Window: PartialEq;

    /// Whether this process may inspect and focus other applications' windows.
    fn is_trusted(&self) -> bool;

    /// The frontmost application, from whichever source answers first.
    fn front_app(&self) -> Option<Self::App>;

    /// Identity of the frontmost application, without acquiring a handle.
    fn front_app_info(&self) -> Option<FrontAppInfo>;

    /// Whether `app` is the recognized terminal application.
    fn is_target_app(&self, app: &Self::App) -> bool;

    /// The application's focused window, falling back to its first window.
    fn focused_window(&self, app: &Self::App) -> Option<Self::Window>;

    /// Every window of the application, or `None` if the list is unreadable.
    fn all_windows(&self, app: &Self::App) -> Option<Vec<Self::Window>>;

    /// Current frame of a window, or `None` if it cannot be measured.
    fn rect(&self, window: &Self::Window) -> Option<Rect>;

    /// Raise and focus `window`, then activate its owning process. Best effort.
    fn focus(&self, app: &Self::App, window: &Self::Window);
}

/// Window system for the current platform.
#[cfg(target_os = "macos")]
pub fn native(terminal: TerminalApp) -> MacWindowSystem {
    MacWindowSystem::new(terminal)
}

/// Window system for the current platform.
#[cfg(not(target_os = "macos"))]
pub fn native(_terminal: TerminalApp) -> UnsupportedWindowSystem {
    UnsupportedWindowSystem
}
