//! Window system stand-in for platforms without window-level hopping.
//!
//! It is never trusted, so a hop that cannot be served by tmux reports a
//! permission failure. The tmux fast path keeps working everywhere.

use super::{FrontAppInfo, WindowSystem};
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedWindowSystem;

impl WindowSystem for UnsupportedWindowSystem {
    type App = ();
    type Window = ();

    fn is_trusted(&self) -> bool {
        log::debug!("window-level hopping is only available on macOS");
        false
    }

    fn front_app(&self) -> Option<()> {
        None
    }

    fn front_app_info(&self) -> Option<FrontAppInfo> {
        None
    }

    fn is_target_app(&self, _app: &()) -> bool {
        false
    }

    fn focused_window(&self, _app: &()) -> Option<()> {
        None
    }

    fn all_windows(&self, _app: &()) -> Option<Vec<()>> {
        None
    }

    fn rect(&self, _window: &()) -> Option<Rect> {
        None
    }

    fn focus(&self, _app: &(), _window: &()) {}
}
