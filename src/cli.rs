//! Command-line front-end for `kn-export`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::{ExportError, Result};
use crate::export::{export_service, ExportMode, ExportOptions};
use crate::output::{render, OutputFormat};
use crate::serving::ServingClient;

const EXAMPLES: &str = "\
Examples:
  # Export a service in YAML format
  kn-export foo -n bar -o yaml

  # Export a service in JSON format
  kn-export foo -n bar -o json

  # Export a service with revisions
  kn-export foo --with-revisions --mode=export -n bar -o json

  # Export services in kubectl friendly format, as a list kind, one service item for each revision
  kn-export foo --with-revisions --mode=replay -n bar -o json";

/// Export a service and its revisions
#[derive(Debug, Parser)]
#[command(name = "kn-export", version, after_help = EXAMPLES)]
pub struct Cli {
    /// Name of the service to export
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Namespace of the service
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Export all routed revisions
    #[arg(long)]
    pub with_revisions: bool,

    /// Format for exporting all routed revisions
    #[arg(long, value_enum)]
    pub mode: Option<ExportMode>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Path to the config file (default: ~/.kn-export/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Custom data directory for logs and config (default: ~/.kn-export)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// A validated export invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub name: String,
    /// `None` defers to the kubeconfig's namespace
    pub namespace: Option<String>,
    pub context: Option<String>,
    pub output: OutputFormat,
    pub options: ExportOptions,
}

impl Cli {
    /// Check the invocation and merge in config defaults.
    ///
    /// Runs before any cluster access so usage errors never cost a request.
    pub fn into_request(self, config: &Config) -> Result<ExportRequest> {
        let [name] = <[String; 1]>::try_from(self.names).map_err(|_| {
            ExportError::usage(
                "'kn service export' requires name of the service as single argument",
            )
        })?;

        let output = self
            .output
            .or(config.output)
            .ok_or_else(|| ExportError::usage("'kn service export' requires output format"))?;

        Ok(ExportRequest {
            name,
            namespace: self.namespace.or_else(|| config.namespace.clone()),
            context: self.context.or_else(|| config.context.clone()),
            output,
            options: ExportOptions {
                with_revisions: self.with_revisions,
                mode: self.mode.unwrap_or(config.mode),
            },
        })
    }
}

/// Fetch, export and render in one go.
pub async fn run_export<C>(client: &C, request: &ExportRequest) -> Result<Vec<u8>>
where
    C: ServingClient + ?Sized,
{
    let service = client.get_service(&request.name).await?;
    let artifact = export_service(client, &service, request.options).await?;
    render(&artifact, request.output)
}
