use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_LANGUAGE;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Send a solution to the model and print the normalized feedback
    Analyze {
        /// Source file holding the solution
        file: PathBuf,
        #[clap(short, long)]
        problem: String,
        #[clap(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,
    },
    /// Normalize raw model output read from a file or stdin
    Normalize {
        input: Option<PathBuf>,
        /// Log which extraction tier produced the record
        #[clap(long)]
        trace: bool,
    },
    /// Check the configuration file
    Validate,
}
