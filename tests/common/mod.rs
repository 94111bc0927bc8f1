//! Shared integration test helpers for ttyhop.
//!
//! ```ignore
//! mod common;
//! use common::{FakeWindowSystem, ScriptedRunner};
//! ```
//!
//! Both fakes record every call so tests can assert on what the hop engine
//! asked for, not only on what it returned. The `#[allow(dead_code)]`
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use ttyhop::geometry::Rect;
use ttyhop::platform::{AppSource, FrontAppInfo, WindowSystem};
use ttyhop_tmux::{CommandRunner, TmuxError};

/// A window frame of the given size centered on `(cx, cy)`.
pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Rect {
    Rect::new(cx - width / 2.0, cy - height / 2.0, width, height)
}

/// Scripted window system. Windows are numeric ids; the app is `()`.
#[derive(Debug)]
pub struct FakeWindowSystem {
    pub trusted: bool,
    pub has_front_app: bool,
    pub is_target: bool,
    pub focused: Option<u32>,
    pub windows: Option<Vec<u32>>,
    pub rects: HashMap<u32, Rect>,
    pub info: Option<FrontAppInfo>,
    calls: RefCell<Vec<String>>,
}

impl FakeWindowSystem {
    /// A trusted terminal whose windows are `frames`, in list order, with
    /// the first one focused.
    pub fn terminal(frames: &[(u32, Rect)]) -> Self {
        Self {
            trusted: true,
            has_front_app: true,
            is_target: true,
            focused: frames.first().map(|(id, _)| *id),
            windows: Some(frames.iter().map(|(id, _)| *id).collect()),
            rects: frames.iter().copied().collect(),
            info: Some(FrontAppInfo {
                bundle_id: "org.alacritty".to_string(),
                name: "Alacritty".to_string(),
                source: AppSource::Workspace,
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every collaborator call, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// The window passed to `focus`, if any.
    pub fn focused_target(&self) -> Option<u32> {
        self.calls
            .borrow()
            .iter()
            .find_map(|c| c.strip_prefix("focus ").and_then(|id| id.parse().ok()))
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl WindowSystem for FakeWindowSystem {
    type App = ();
    type Window = u32;

    fn is_trusted(&self) -> bool {
        self.record("is_trusted");
        self.trusted
    }

    fn front_app(&self) -> Option<()> {
        self.record("front_app");
        self.has_front_app.then_some(())
    }

    fn front_app_info(&self) -> Option<FrontAppInfo> {
        self.record("front_app_info");
        self.info.clone()
    }

    fn is_target_app(&self, _app: &()) -> bool {
        self.record("is_target_app");
        self.is_target
    }

    fn focused_window(&self, _app: &()) -> Option<u32> {
        self.record("focused_window");
        self.focused
    }

    fn all_windows(&self, _app: &()) -> Option<Vec<u32>> {
        self.record("all_windows");
        self.windows.clone()
    }

    fn rect(&self, window: &u32) -> Option<Rect> {
        self.record(format!("rect {window}"));
        self.rects.get(window).copied()
    }

    fn focus(&self, _app: &(), window: &u32) {
        self.record(format!("focus {window}"));
    }
}

/// Command runner answering from a table of command lines.
///
/// A command line is the arguments joined by single spaces. Each entry holds
/// a sequence of answers; the last one repeats forever. Unknown commands
/// fail like tmux does without a server.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    answers: RefCell<HashMap<String, Vec<Result<String, String>>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `line` with `output` every time.
    pub fn on(self, line: &str, output: &str) -> Self {
        self.on_seq(line, &[output])
    }

    /// Answer `line` with `outputs` in turn, repeating the last.
    pub fn on_seq(self, line: &str, outputs: &[&str]) -> Self {
        let answers = outputs.iter().map(|o| Ok(o.to_string())).collect();
        self.answers.borrow_mut().insert(line.to_string(), answers);
        self
    }

    /// Make `line` fail with `stderr`.
    pub fn fail(self, line: &str, stderr: &str) -> Self {
        self.answers
            .borrow_mut()
            .insert(line.to_string(), vec![Err(stderr.to_string())]);
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How many times `line` was run.
    pub fn count(&self, line: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == line).count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
        let line = args.join(" ");
        self.calls.borrow_mut().push(line.clone());

        let mut answers = self.answers.borrow_mut();
        let answer = match answers.get_mut(&line) {
            Some(queue) if queue.len() > 1 => queue.remove(0),
            Some(queue) => queue
                .first()
                .cloned()
                .unwrap_or_else(|| Err("no answer".to_string())),
            None => Err("no server running".to_string()),
        };

        answer.map_err(|stderr| TmuxError::Failed {
            command: args.first().copied().unwrap_or_default().to_string(),
            status: "exit status: 1".to_string(),
            stderr,
        })
    }
}
