use anyhow::Result;
use clap::Args;
use fxtbenv_core::environment;
use fxtbenv_core::{FxtbConfig, console};

#[derive(Args, Debug)]
pub struct InitArgs {}

pub fn run(_args: InitArgs, config: &FxtbConfig) -> Result<()> {
    console::header("init", env!("CARGO_PKG_VERSION"));

    let summary = environment::initialize(config);

    if summary.is_complete() {
        console::info(&format!(
            "Initialized {} ({} directories created)",
            config.home_dir().display(),
            summary.created.len()
        ));
    } else {
        console::warn(&format!(
            "{} directories could not be created under {}",
            summary.failed.len(),
            config.home_dir().display()
        ));
    }

    Ok(())
}
