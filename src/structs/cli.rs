use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "codecoach")]
#[clap(about = "AI-assisted feedback for coding-practice solutions", long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to ~/codecoach/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
