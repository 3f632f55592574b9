//! Handles all user-facing output for the CLI.
//!
//! Rendering functions write to any [`WriteColor`], so tests can capture
//! output in a [`termcolor::Buffer`].

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    cli::args::OutputFormat,
    errors::MatrixError,
    matrix::Matrix,
    pack::DeploymentPack,
};

/// Colour stdout only when it is a terminal.
pub fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Writes `matrix` in the requested format.
pub fn write_matrix<W: WriteColor>(
    out: &mut W,
    matrix: &Matrix,
    format: OutputFormat,
) -> Result<(), MatrixError> {
    match format {
        OutputFormat::Text => write_text(out, matrix).map_err(|source| MatrixError::Write { source }),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(matrix)
                .map_err(|source| MatrixError::RenderJson { source })?;
            writeln!(out, "{json}").map_err(|source| MatrixError::Write { source })
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(matrix)
                .map_err(|source| MatrixError::RenderYaml { source })?;
            write!(out, "{yaml}").map_err(|source| MatrixError::Write { source })
        }
    }
}

/// Human-readable rendering: both axes, then one `provider / environment`
/// line per combination.
pub fn write_text<W: WriteColor>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    heading(out, "Selected providers:")?;
    writeln!(out, " {:?}", matrix.providers)?;
    heading(out, "Selected environments:")?;
    writeln!(out, " {:?}", matrix.environments)?;
    heading(out, "Matrix combinations:")?;
    writeln!(out)?;
    for combination in &matrix.combinations {
        writeln!(
            out,
            "- {} / {}",
            combination.provider, combination.environment
        )?;
    }
    Ok(())
}

/// Summary printed after a successful pack check.
pub fn write_pack_summary<W: WriteColor>(out: &mut W, pack: &DeploymentPack) -> io::Result<()> {
    let manifest = &pack.manifest;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "✓")?;
    out.reset()?;
    writeln!(out, " {} {} ({})", manifest.id, manifest.version, manifest.kind)?;

    heading(out, "Flows:")?;
    writeln!(out)?;
    for flow in &manifest.flows {
        match &flow.entry {
            Some(entry) => writeln!(out, "  {} -> {}", flow.id, entry)?,
            None => writeln!(out, "  {}", flow.id)?,
        }
    }

    heading(out, "Components:")?;
    writeln!(out)?;
    for component in &pack.components {
        let iac = match &component.capabilities.iac {
            Some(iac) => format!(
                "iac: write_templates={}, execute_plans={}",
                iac.write_templates, iac.execute_plans
            ),
            None => "no iac".to_string(),
        };
        writeln!(out, "  {} {} [{}]", component.id, component.version, iac)?;
    }
    Ok(())
}

fn heading<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{text}")?;
    out.reset()
}
