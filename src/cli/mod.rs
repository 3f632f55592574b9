//! The matrix-preview Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{path::Path, process};

use clap::Parser;
use miette::Report;

use crate::{
    cli::args::{Command, MatrixArgs, OutputFormat},
    config::MatrixDefaults,
    errors::MatrixError,
    logging,
    matrix::Matrix,
    pack::{DeploymentPack, PackIndex},
};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = MatrixArgs::parse();
    logging::init(args.verbose);

    let result = match args.command {
        Some(Command::Pack { ref index, ref entry }) => handle_pack(index, entry),
        None => handle_preview(&args),
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

/// Renders an error as a miette report on stderr.
pub fn print_error(error: MatrixError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

fn handle_preview(args: &MatrixArgs) -> Result<(), MatrixError> {
    let defaults = match &args.defaults {
        Some(path) => MatrixDefaults::load(path)?,
        None => MatrixDefaults::default(),
    };
    let matrix = Matrix::resolve(&args.providers, &args.environments, &defaults);
    tracing::debug!(
        providers = ?matrix.providers,
        environments = ?matrix.environments,
        combinations = matrix.len(),
        "matrix resolved"
    );
    if matrix.is_empty() {
        tracing::warn!("selection produced an empty matrix");
    }

    output::write_matrix(&mut output::stdout(), &matrix, args.format)
}

fn handle_pack(index: &Path, entry: &str) -> Result<(), MatrixError> {
    let index = PackIndex::load(index)?;
    let manifest_path = index.locate(entry)?;
    tracing::info!(entry, manifest = %manifest_path.display(), "checking pack");

    let pack = DeploymentPack::load(&manifest_path)?;
    pack.check()?;

    output::write_pack_summary(&mut output::stdout(), &pack)
        .map_err(|source| MatrixError::Write { source })
}

/// Renders the matrix for the given inputs without touching stdout.
pub fn preview(
    providers: &str,
    environments: &str,
    defaults: &MatrixDefaults,
    format: OutputFormat,
) -> Result<String, MatrixError> {
    let matrix = Matrix::resolve(providers, environments, defaults);
    let mut buffer = termcolor::Buffer::no_color();
    output::write_matrix(&mut buffer, &matrix, format)?;
    String::from_utf8(buffer.into_inner()).map_err(|e| MatrixError::Write {
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}
