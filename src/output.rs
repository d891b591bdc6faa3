//! Rendering export artifacts.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Machine-readable output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Serialize `value` in `format`.
///
/// Rendering is done in memory so nothing is written when it fails.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = match format {
        OutputFormat::Json => serde_json::to_vec_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.into_bytes(),
    };
    if !buf.ends_with(b"\n") {
        buf.push(b'\n');
    }
    Ok(buf)
}

pub fn write_rendered<T: Serialize, W: Write>(
    value: &T,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let buf = render(value, format)?;
    out.write_all(&buf)?;
    out.flush()?;
    Ok(())
}
