//! In-memory serving client for deterministic testing
//!
//! Implements `ServingClient` over a fixed set of services and revisions
//! without touching a cluster. Every call is recorded so tests can assert
//! how many API requests an export issued.
//!
//! # Example
//! ```no_run
//! use kn_export::serving::mock::{MockServingClient, MockCall};
//! use kn_export::serving::{Service, ServingClient};
//!
//! #[tokio::test]
//! async fn test_fetch() {
//!     let client = MockServingClient::new("default").with_service(Service::default());
//!     let _ = client.get_service("foo").await;
//!     assert_eq!(client.calls(), vec![MockCall::GetService("foo".into())]);
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{ExportError, Result};
use crate::serving::client::ServingClient;
use crate::serving::types::{Revision, Service, SERVICE_LABEL};

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    GetService(String),
    ListRevisions(String),
}

/// Failure to inject into `list_revisions`.
#[derive(Debug, Clone)]
pub enum MockListError {
    /// Simulates an API server error with the given HTTP status.
    Api { code: u16, message: String },
}

impl MockListError {
    fn into_export_error(self) -> ExportError {
        match self {
            MockListError::Api { code, message } => {
                ExportError::Kube(kube::Error::Api(kube::error::ErrorResponse {
                    status: "Failure".to_string(),
                    message,
                    reason: String::new(),
                    code,
                }))
            }
        }
    }
}

#[derive(Default)]
pub struct MockServingClient {
    namespace: String,
    services: Vec<Service>,
    revisions: Vec<Revision>,
    list_error: Option<MockListError>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockServingClient {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    pub fn with_revisions(mut self, revisions: impl IntoIterator<Item = Revision>) -> Self {
        self.revisions.extend(revisions);
        self
    }

    /// Make `list_revisions` fail with the given error
    pub fn failing_list(mut self, error: MockListError) -> Self {
        self.list_error = Some(error);
        self
    }

    /// Requests received so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, MockCall::ListRevisions(_)))
            .count()
    }
}

#[async_trait]
impl ServingClient for MockServingClient {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get_service(&self, name: &str) -> Result<Service> {
        self.calls.lock().push(MockCall::GetService(name.to_string()));
        self.services
            .iter()
            .find(|service| service.name() == name)
            .cloned()
            .ok_or_else(|| ExportError::ServiceNotFound {
                name: name.to_string(),
                namespace: self.namespace.clone(),
            })
    }

    async fn list_revisions(&self, service_name: &str) -> Result<Vec<Revision>> {
        self.calls
            .lock()
            .push(MockCall::ListRevisions(service_name.to_string()));
        if let Some(error) = &self.list_error {
            return Err(error.clone().into_export_error());
        }

        // Same label filter the API server applies.
        Ok(self
            .revisions
            .iter()
            .filter(|revision| {
                revision
                    .metadata
                    .labels
                    .as_ref()
                    .and_then(|labels| labels.get(SERVICE_LABEL))
                    .is_some_and(|owner| owner == service_name)
            })
            .cloned()
            .collect())
    }
}
