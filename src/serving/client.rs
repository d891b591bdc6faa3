use async_trait::async_trait;
use kube::api::{Api, ListParams};
use kube::config::{Config as KubeConfig, KubeConfigOptions};
use kube::Client;
use tracing::{debug, info};

use crate::error::{ExportError, Result};
use crate::serving::types::{Revision, Service, SERVICE_LABEL};

/// Read access to Knative Serving resources in one namespace.
#[async_trait]
pub trait ServingClient: Send + Sync {
    /// Namespace every call is scoped to.
    fn namespace(&self) -> &str;

    async fn get_service(&self, name: &str) -> Result<Service>;

    /// All revisions owned by `service_name`, in no particular order.
    async fn list_revisions(&self, service_name: &str) -> Result<Vec<Revision>>;
}

/// `ServingClient` talking to a Kubernetes API server.
pub struct KubeServingClient {
    client: Client,
    namespace: String,
}

impl KubeServingClient {
    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    /// Connect using the local kubeconfig, falling back to in-cluster config.
    ///
    /// `namespace` wins over the kubeconfig's default namespace when given.
    pub async fn connect(context: Option<&str>, namespace: Option<&str>) -> Result<Self> {
        let config = match context {
            Some(context) => {
                KubeConfig::from_kubeconfig(&KubeConfigOptions {
                    context: Some(context.to_string()),
                    ..Default::default()
                })
                .await?
            }
            None => KubeConfig::infer().await?,
        };

        let namespace = namespace
            .map(str::to_string)
            .unwrap_or_else(|| config.default_namespace.clone());
        debug!(
            cluster_url = %config.cluster_url,
            namespace = %namespace,
            "Connecting to Kubernetes API"
        );

        let client = Client::try_from(config)?;
        Ok(Self::new(client, namespace))
    }

    fn services(&self) -> Api<Service> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }

    fn revisions(&self) -> Api<Revision> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }
}

#[async_trait]
impl ServingClient for KubeServingClient {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get_service(&self, name: &str) -> Result<Service> {
        info!(service = %name, namespace = %self.namespace, "Fetching service");
        let mut service = match self.services().get(name).await {
            Ok(service) => service,
            Err(kube::Error::Api(response)) if response.code == 404 => {
                return Err(ExportError::ServiceNotFound {
                    name: name.to_string(),
                    namespace: self.namespace.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        service.ensure_type_meta();
        Ok(service)
    }

    async fn list_revisions(&self, service_name: &str) -> Result<Vec<Revision>> {
        let params = ListParams::default().labels(&format!("{}={}", SERVICE_LABEL, service_name));
        let list = self.revisions().list(&params).await?;
        info!(
            service = %service_name,
            count = list.items.len(),
            "Listed revisions"
        );

        // List items come back without type metadata.
        Ok(list
            .items
            .into_iter()
            .map(|mut revision| {
                revision.ensure_type_meta();
                revision
            })
            .collect())
    }
}
