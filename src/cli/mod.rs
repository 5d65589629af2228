use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract types from source code given a file path
    Extract {
        /// Path to the Rust source file
        file_path: PathBuf,
    },
}
