pub mod cli;
pub mod config;
pub mod render;
pub mod shell;

use std::ffi::OsString;
use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use tasktrack_core::TaskListController;
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet);

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting tasktrack shell"
    );

    let mut cfg =
        config::Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cfg.apply_flags(cli.filter, cli.prompt);
    debug!(?cfg, "effective configuration");

    let controller = TaskListController::with_filter(cfg.default_filter);
    let renderer = render::Renderer::for_stdout();

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = shell::Shell::new(controller, renderer, stdin.lock(), io::stdout().lock());
    if interactive {
        shell = shell.with_prompt(cfg.prompt);
    }

    shell.run()?;

    let counts = shell.controller().counts();
    info!(
        total = counts.total,
        completed = counts.completed,
        "done"
    );
    Ok(())
}
