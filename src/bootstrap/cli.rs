use std::path::PathBuf;

use clap::Parser;

/// Records clipboard history and applies text modifiers to lines read from stdin.
#[derive(Debug, Parser)]
#[command(name = "clipmod", version, about)]
pub struct Cli {
    /// Configuration file (defaults to config.toml in the app data directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Modifier script defining `modify(input)`; overrides the config file
    #[arg(long, value_name = "PATH", conflicts_with = "modifier")]
    pub script: Option<PathBuf>,

    /// Builtin modifier to apply when no script is given
    #[arg(long, value_name = "NAME")]
    pub modifier: Option<String>,

    /// Use an in-memory clipboard instead of the system clipboard
    #[arg(long)]
    pub headless: bool,

    /// Print the builtin modifiers and exit
    #[arg(long)]
    pub list_modifiers: bool,
}
