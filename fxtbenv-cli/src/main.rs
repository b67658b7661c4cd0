use anyhow::Result;
use clap::Parser;
use fxtbenv_core::{FxtbConfig, console};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let args = Cli::parse();
    let config = FxtbConfig::from_env();

    init_tracing(args.verbose || config.verbose);

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            console::error(&format!("{:#}", error));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli, config: &FxtbConfig) -> Result<()> {
    debug!("using home directory {}", config.home_dir().display());

    match args.command {
        Command::Install(install_args) => commands::install::run(install_args, config),
        Command::Init(init_args) => commands::init::run(init_args, config),
        Command::List(list_args) => commands::list::run(list_args, config),
        Command::Profile(profile_args) => commands::profile::run(profile_args, config),
        Command::Config(config_args) => commands::config::run(config_args, config),
        Command::Completions(completions_args) => commands::completions::run(completions_args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
