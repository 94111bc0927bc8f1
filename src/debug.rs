/// Logging for ttyhop
///
/// Every module logs through the `log` facade. The binary installs
/// [`init_log_bridge`] once at startup, which writes `ttyhop: <message>`
/// lines to stderr so stdout stays clean for `--check` and `shell zsh`.
///
/// Level selection:
/// - `-q/--quiet`: nothing
/// - `-v/--log` or `TTYHOP_LOG=1`: debug and above
/// - otherwise: warnings and errors only
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

/// Prefix written before every log line.
pub const LOG_PREFIX: &str = "ttyhop: ";

/// Pick the log level from the command-line flags and `TTYHOP_LOG`.
///
/// Quiet wins over every request for verbosity.
pub fn level_filter(verbose: bool, quiet: bool, env_log: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if verbose || env_log {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

struct StderrBridge;

static LOGGER: StderrBridge = StderrBridge;

impl Log for StderrBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", format_line(record.args()));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(args: &std::fmt::Arguments) -> String {
    format!("{LOG_PREFIX}{args}")
}

/// Route `log` records to stderr at `level`.
///
/// Only the first call installs the logger; every call sets the global
/// max level.
pub fn init_log_bridge(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("log bridge already installed");
    }
    log::set_max_level(level);
}
