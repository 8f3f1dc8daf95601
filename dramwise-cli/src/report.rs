//! Rendering recommendation results.

use std::io::{self, Write};

use clap::ValueEnum;
use dramwise_core::{Ranked, Recommendations};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// How recommendations are written to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable preference and recommendation lists.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write `output` to `writer` in `format`.
pub(crate) fn write_report(
    writer: &mut dyn Write,
    format: OutputFormat,
    output: &Recommendations,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, output).map_err(CliError::WriteOutput),
        OutputFormat::Json => write_json(writer, output),
    }
}

fn write_text(writer: &mut dyn Write, output: &Recommendations) -> io::Result<()> {
    writeln!(writer, "We have detected your flavor preferences as:")?;
    write_entries(writer, &output.preferences)?;
    writeln!(writer)?;
    writeln!(writer, "Our recommendations: ")?;
    write_entries(writer, &output.recommendations)
}

fn write_entries(writer: &mut dyn Write, entries: &[Ranked]) -> io::Result<()> {
    for entry in entries {
        writeln!(writer, "- {} (weight {:.2})", entry.name, entry.weight)?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, output: &Recommendations) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
