//! Command-line interface for ttyhop.
//!
//! Parsing is separated from execution so that [`execute`] can be driven
//! with fake collaborators and an in-memory output buffer.

use crate::hop::{EXIT_USAGE, HopOptions, Hopper};
use crate::platform::WindowSystem;
use crate::shell_integration::Shell;
use crate::version::BuildInfo;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use ttyhop_config::{Config, Direction, Environment};
use ttyhop_tmux::CommandRunner;

/// Default for `--edge-steps` when the value is missing or out of range.
pub const DEFAULT_EDGE_STEPS: u32 = 5;

/// ttyhop - hop focus left/right across tmux panes and terminal windows
#[derive(Debug, Parser)]
#[command(name = "ttyhop")]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print trust and front app info without changing focus
    #[arg(long, global = true)]
    pub check: bool,

    /// Enable logging (or set TTYHOP_LOG=1)
    #[arg(short = 'v', long = "log", global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Don't land on the edge pane after a window hop
    #[arg(long, global = true)]
    pub no_edge: bool,

    /// Legacy edge step count (1-49, default 5)
    #[arg(long, value_name = "N", global = true)]
    pub edge_steps: Option<String>,

    /// Milliseconds to wait for window focus (default 200, env: TTYHOP_EDGE_WAIT_MS)
    #[arg(long, value_name = "N", global = true, allow_negative_numbers = true)]
    pub wait_ms: Option<i64>,

    /// Print version and exit
    #[arg(long, global = true)]
    pub version: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Hop to the pane or terminal window on the left
    #[command(visible_alias = "l")]
    Left,

    /// Hop to the pane or terminal window on the right
    #[command(visible_alias = "r")]
    Right,

    /// Print the shell integration script for eval
    Shell {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Sanitized `--edge-steps` value.
    pub fn edge_steps(&self) -> u32 {
        self.edge_steps
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|n| (1..50).contains(n))
            .unwrap_or(DEFAULT_EDGE_STEPS)
    }

    /// Resolve hop options from config, environment and flags.
    ///
    /// A zero or negative `--wait-ms` is no override.
    pub fn hop_options(&self, config: &Config, env: &Environment) -> HopOptions {
        let wait_ms = self.wait_ms.and_then(|ms| u64::try_from(ms).ok());
        HopOptions {
            in_tmux: env.in_tmux,
            edge_landing: config.edge_landing && !self.no_edge,
            edge_wait: config.edge_wait(wait_ms, env),
            poll_interval: config.poll_interval(),
        }
    }

    /// Log level requested by flags and environment.
    pub fn log_level(&self, env: &Environment) -> log::LevelFilter {
        crate::debug::level_filter(self.verbose, self.quiet, env.log_enabled)
    }
}

/// Result of argument parsing
#[derive(Debug)]
pub enum CliResult {
    /// Arguments are valid; run them
    Continue(Cli),
    /// Exit with the given code (help printed or usage error)
    Exit(i32),
}

/// Parse command-line arguments without exiting the process.
///
/// `--help` prints help and yields exit code 0; any other parse error
/// prints the message with usage to stderr and yields 64.
pub fn parse_args<I, T>(args: I) -> CliResult
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => CliResult::Continue(cli),
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp => CliResult::Exit(0),
                _ => CliResult::Exit(EXIT_USAGE),
            }
        }
    }
}

fn print_usage() {
    eprintln!("{}", Cli::command().render_usage());
}

/// Run a parsed command line and return the process exit code.
pub fn execute<S, R, W>(
    cli: &Cli,
    options: HopOptions,
    windows: &S,
    runner: &R,
    out: &mut W,
) -> i32
where
    S: WindowSystem,
    R: CommandRunner,
    W: Write,
{
    if cli.version {
        let _ = writeln!(out, "{}", BuildInfo::current().version_line(crate::VERSION));
        return 0;
    }

    if cli.check {
        let trusted = windows.is_trusted();
        let (bid, name, tag) = match windows.front_app_info() {
            Some(info) => (info.bundle_id, info.name, info.source.tag()),
            None => (String::new(), String::new(), ""),
        };
        let _ = writeln!(
            out,
            "trusted={trusted} front_bid={bid:?} front_name={name:?} ({tag})"
        );
        return 0;
    }

    let direction = match cli.command {
        Some(Commands::Left) => Direction::West,
        Some(Commands::Right) => Direction::East,
        Some(Commands::Shell { shell }) => {
            let _ = write!(out, "{}", shell.script());
            return 0;
        }
        None => {
            print_usage();
            return EXIT_USAGE;
        }
    };

    log::debug!(
        "hop {direction}: edge_landing={} edge_steps={} edge_wait={}ms",
        options.edge_landing,
        cli.edge_steps(),
        options.edge_wait.as_millis()
    );

    match Hopper::new(windows, runner, options).hop(direction) {
        Ok(outcome) => {
            log::debug!("hop {direction}: {outcome:?}");
            0
        }
        Err(e) => {
            log::debug!("denied: {e}");
            e.exit_code()
        }
    }
}
