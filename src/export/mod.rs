//! Service export: revision selection, sanitization and the two output shapes.
//!
//! - *export* mode builds one `Export` object for `kn` to import later.
//! - *replay* mode builds a `List` of services, one per routed historical
//!   revision followed by the current service, that can be applied in order.

pub mod artifact;
pub mod assemble;
pub mod reconstruct;
pub mod sanitize;
pub mod select;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::serving::{Service, ServingClient};

pub use artifact::{Export, ExportArtifact, ExportSpec, ServiceList};
pub use assemble::{export_for_import, export_for_replay};
pub use reconstruct::{export_revision, latest_service, service_from_revision};
pub use select::{
    compare_revisions, revisions_to_export, routed_revisions, sort_revisions, RevisionSelection,
};

/// Shape of the exported artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// Composite `Export` object for `kn` import
    #[default]
    Export,
    /// `List` of services, one per routed revision
    Replay,
}

impl ExportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::Export => "export",
            ExportMode::Replay => "replay",
        }
    }
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Include routed historical revisions
    pub with_revisions: bool,
    pub mode: ExportMode,
}

/// Export `service`, listing its revisions through `client` when history is
/// requested.
///
/// Issues at most one list request and never modifies `service`.
pub async fn export_service<C>(
    client: &C,
    service: &Service,
    options: ExportOptions,
) -> Result<ExportArtifact>
where
    C: ServingClient + ?Sized,
{
    info!(
        service = %service.name(),
        mode = %options.mode,
        with_revisions = options.with_revisions,
        "Exporting service"
    );

    let history = if options.with_revisions {
        Some(revisions_to_export(client, service).await?)
    } else {
        None
    };

    let artifact = match (options.mode, history) {
        (ExportMode::Replay, Some(history)) => {
            ExportArtifact::Replay(export_for_replay(service, &history))
        }
        (ExportMode::Replay, None) => ExportArtifact::Service(latest_service(service, false)),
        (ExportMode::Export, history) => {
            ExportArtifact::Import(export_for_import(service, history.as_ref()))
        }
    };
    Ok(artifact)
}
