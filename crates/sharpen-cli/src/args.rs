use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the sharpen binary.
#[derive(Parser, Debug)]
#[command(
    name = "sharpen",
    version,
    about = "Attribute and localisation analyzers over C# syntax snapshots"
)]
pub struct CliArgs {
    /// Path to a sharpen.json config file. Defaults to ./sharpen.json when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Scan every document of a snapshot and report diagnostics.
    Check {
        snapshot: PathBuf,

        /// Print diagnostics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Request the AttributeUsage refactoring at a position and print the result.
    Refactor {
        snapshot: PathBuf,

        /// Name of the document to refactor.
        #[arg(long)]
        document: String,

        /// Byte offset of the selection start.
        #[arg(long)]
        offset: u32,

        /// Length of the selection.
        #[arg(long, default_value_t = 0)]
        length: u32,
    },

    /// Annotate the first class of every document that derives from System.Attribute.
    Annotate { snapshot: PathBuf },

    /// Print the resolved configuration.
    #[command(alias = "showConfig")]
    ShowConfig,
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;
