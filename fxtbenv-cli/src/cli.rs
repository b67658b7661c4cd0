use crate::commands;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fxtbenv",
    about = "Install multiple Firefox/Thunderbird and switch them.",
    version,
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install Firefox/Thunderbird
    #[command(visible_alias = "i")]
    Install(commands::install::InstallArgs),
    /// Create the directory tree under the fxtbenv home
    Init(commands::init::InitArgs),
    /// List installed versions
    #[command(visible_alias = "ls")]
    List(commands::list::ListArgs),
    /// Manage named profiles
    Profile(commands::profile::ProfileArgs),
    /// Show the resolved configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
