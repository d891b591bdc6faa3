use serde::{Deserialize, Serialize};

use crate::serving::{Revision, Service};

pub const EXPORT_API_VERSION: &str = "client.knative.dev/v1alpha1";
pub const EXPORT_KIND: &str = "Export";

pub const LIST_API_VERSION: &str = "v1";
pub const LIST_KIND: &str = "List";

/// Import-mode artifact: the current service plus its routed history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    pub api_version: String,
    pub kind: String,
    pub spec: ExportSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSpec {
    pub service: Service,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

impl Export {
    pub fn new(service: Service, revisions: Vec<Revision>) -> Self {
        Self {
            api_version: EXPORT_API_VERSION.to_string(),
            kind: EXPORT_KIND.to_string(),
            spec: ExportSpec { service, revisions },
        }
    }
}

/// Replay-mode artifact, appliable with generic cluster tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceList {
    pub api_version: String,
    pub kind: String,
    pub items: Vec<Service>,
}

impl ServiceList {
    pub fn new(items: Vec<Service>) -> Self {
        Self {
            api_version: LIST_API_VERSION.to_string(),
            kind: LIST_KIND.to_string(),
            items,
        }
    }
}

/// Whatever shape an export produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportArtifact {
    Import(Export),
    Replay(ServiceList),
    /// Replay mode without history is just the latest service.
    Service(Service),
}

impl ExportArtifact {
    pub fn as_import(&self) -> Option<&Export> {
        match self {
            ExportArtifact::Import(export) => Some(export),
            _ => None,
        }
    }

    pub fn as_replay(&self) -> Option<&ServiceList> {
        match self {
            ExportArtifact::Replay(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_service(&self) -> Option<&Service> {
        match self {
            ExportArtifact::Service(service) => Some(service),
            _ => None,
        }
    }
}
