use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser};
use spdlog::{debug, warn};

use blog_manage::cli::{dispatch, Cli, Command};
use blog_manage::config::open_config;
use blog_manage::logger::configure_logger;

/// Exit code when no command is given, same as a usage error
const EXIT_USAGE: u8 = 2;

fn run(cli: &Cli, command: Command) -> Result<()> {
    let config = open_config(cli.config.as_deref()).context("Could not load configuration")?;

    if let Err(err) = configure_logger(&config.log) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let content_root = config.content_root(cli.content_dir.as_deref())?;
    debug!("Content dir: {}", content_root.display());

    dispatch(command, &content_root, Local::now().date_naive())?;
    Ok(())
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    let Some(command) = cli.command.take() else {
        let _ = Cli::command().print_help();
        return ExitCode::from(EXIT_USAGE);
    };

    match run(&cli, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
