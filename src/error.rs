//! Error types for service export.

use thiserror::Error;

/// Everything that can abort an export.
///
/// None of these are recovered from locally: the export stops and no
/// partial artifact is written.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Invalid invocation, reported before any API access.
    #[error("{0}")]
    Usage(String),

    #[error("service '{name}' not found in namespace '{namespace}'")]
    ServiceNotFound { name: String, namespace: String },

    #[error("no revisions found for the service {service}")]
    NoRevisions { service: String },

    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("failed to infer Kubernetes configuration: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export cancelled")]
    Cancelled,
}

impl ExportError {
    pub fn usage(message: impl Into<String>) -> Self {
        ExportError::Usage(message.into())
    }

    /// Whether the error was raised before talking to the cluster.
    pub fn is_usage(&self) -> bool {
        matches!(self, ExportError::Usage(_))
    }
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
