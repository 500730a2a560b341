use clap::Parser;
use std::path::PathBuf;

/// Manage the marina's boat inventory
#[derive(Parser, Debug)]
#[command(name = "marina-manager")]
#[command(about = "Manage the marina's boat inventory", long_about = None)]
pub struct CliArgs {
    /// Path to the boat data file
    ///
    /// Loaded at startup (a missing file starts an empty inventory) and
    /// overwritten with the final inventory at exit.
    #[arg(value_name = "FILE", help = "Path to the boat data file")]
    pub data_file: PathBuf,
}
