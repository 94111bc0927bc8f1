use anyhow::{Context, Result};
use std::io::Write;
use ttyhop::cli::{self, CliResult};
use ttyhop::platform;
use ttyhop_config::{Config, Environment};
use ttyhop_tmux::TmuxRunner;

fn main() -> Result<()> {
    // Parse first so usage errors are reported before anything else runs
    let cli = match cli::parse_args(std::env::args_os()) {
        CliResult::Exit(code) => std::process::exit(code),
        CliResult::Continue(cli) => cli,
    };

    let env = Environment::from_process();
    ttyhop::debug::init_log_bridge(cli.log_level(&env));

    let config = Config::load();
    let runner = TmuxRunner::new(config.resolve_tmux_path());
    log::debug!("tmux: {}", runner.program());
    let windows = platform::native(config.terminal_app.clone());

    let options = cli.hop_options(&config, &env);
    let mut stdout = std::io::stdout().lock();
    let code = cli::execute(&cli, options, &windows, &runner, &mut stdout);
    stdout.flush().context("failed to flush stdout")?;
    drop(stdout);

    // Every outcome, including failures, is a plain exit code
    std::process::exit(code);
}
