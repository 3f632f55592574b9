//! Defines the command-line arguments and subcommands for the matrix-preview CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// The main CLI argument structure.
///
/// Without a subcommand the tool previews the matrix.
#[derive(Debug, Parser)]
#[command(
    name = "matrix-preview",
    version,
    about = "Preview the provider/environment matrix used by the deploy workflow."
)]
pub struct MatrixArgs {
    /// Comma-separated providers (aws,gcp,azure). Leave empty for defaults.
    #[arg(long, default_value = "")]
    pub providers: String,

    /// Comma-separated environments (dev,prod). Leave empty for defaults.
    #[arg(long, default_value = "")]
    pub environments: String,

    /// YAML file overriding the default providers and environments.
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// How to print the matrix.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a deployment pack referenced from a pack index.
    Pack {
        /// Path to the pack index (index.json).
        #[arg(required = true)]
        index: PathBuf,

        /// Index entry whose main pack is checked.
        #[arg(long, default_value = "deployment-demo")]
        entry: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}
