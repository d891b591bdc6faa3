//! Service and revision fixtures
//!
//! Objects are built from JSON so they look exactly like what comes back
//! from the API server, server-managed metadata included.

use kn_export::serving::mock::MockServingClient;
use kn_export::{Revision, Service};
use serde_json::{json, Value};

pub const NAMESPACE: &str = "bar";

/// A service whose template is pinned to `template` and whose latest ready
/// revision is the same.
pub fn service(name: &str, template: &str, traffic: Value) -> Service {
    serde_json::from_value(json!({
        "apiVersion": "serving.knative.dev/v1",
        "kind": "Service",
        "metadata": {
            "name": name,
            "namespace": NAMESPACE,
            "uid": "6c8b1a3e-0000-0000-0000-000000000001",
            "resourceVersion": "1042",
            "generation": 2,
            "labels": {
                "serving.knative.dev/serviceUID": "6c8b1a3e-0000-0000-0000-000000000001"
            },
            "annotations": {
                "serving.knative.dev/creator": "kubernetes-admin",
                "serving.knative.dev/lastModifier": "kubernetes-admin"
            }
        },
        "spec": {
            "template": {
                "metadata": { "name": template },
                "spec": {
                    "containers": [{ "name": "user-container", "image": image_for(template) }]
                }
            },
            "traffic": traffic
        },
        "status": {
            "observedGeneration": 2,
            "latestReadyRevisionName": template,
            "latestCreatedRevisionName": template,
            "url": format!("http://{}.{}.example.com", name, NAMESPACE)
        }
    }))
    .expect("valid service fixture")
}

/// A revision of `service` stamped at `generation`.
pub fn revision(service: &str, name: &str, generation: &str) -> Revision {
    serde_json::from_value(json!({
        "metadata": {
            "name": name,
            "namespace": NAMESPACE,
            "uid": format!("uid-{}", name),
            "labels": {
                "serving.knative.dev/service": service,
                "serving.knative.dev/configuration": service,
                "serving.knative.dev/configurationGeneration": generation,
                "serving.knative.dev/configurationUID": "6c8b1a3e-0000-0000-0000-000000000002",
                "serving.knative.dev/serviceUID": "6c8b1a3e-0000-0000-0000-000000000001"
            },
            "annotations": {
                "serving.knative.dev/creator": "kubernetes-admin",
                "serving.knative.dev/routingStateModified": "2024-01-01T00:00:00Z",
                "serving.knative.dev/lastPinned": "1704067200"
            }
        },
        "spec": {
            "containers": [{ "name": "user-container", "image": image_for(name) }],
            "containerConcurrency": 0,
            "timeoutSeconds": 300
        },
        "status": { "observedGeneration": 1 }
    }))
    .expect("valid revision fixture")
}

pub fn image_for(revision: &str) -> String {
    format!("gcr.io/foo/bar:{}", revision)
}

/// Mock client serving `service` and `revisions`, with type metadata filled
/// in the way the real client does.
pub fn client(service: &Service, revisions: Vec<Revision>) -> MockServingClient {
    MockServingClient::new(NAMESPACE)
        .with_service(service.clone())
        .with_revisions(revisions.into_iter().map(|mut revision| {
            revision.ensure_type_meta();
            revision
        }))
}
