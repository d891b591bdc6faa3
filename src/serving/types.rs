//! Knative Serving resource model.
//!
//! Only the parts of `serving.knative.dev/v1` that an export reads or writes
//! are modelled. Pod-level fields go through `k8s_openapi`'s `PodSpec`.

use std::borrow::Cow;

use k8s_openapi::api::core::v1::PodSpec;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::NamespaceResourceScope;
use kube::Resource;
use serde::{Deserialize, Serialize};

pub const SERVING_GROUP: &str = "serving.knative.dev";
pub const SERVING_VERSION: &str = "v1";
pub const SERVING_API_VERSION: &str = "serving.knative.dev/v1";

pub const SERVICE_KIND: &str = "Service";
pub const REVISION_KIND: &str = "Revision";

/// Label carrying the configuration generation a revision was stamped from.
pub const CONFIGURATION_GENERATION_LABEL: &str = "serving.knative.dev/configurationGeneration";

/// Label linking a revision to the service that owns it.
pub const SERVICE_LABEL: &str = "serving.knative.dev/service";

/// A Knative service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ServiceSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(default)]
    pub template: RevisionTemplateSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traffic: Vec<TrafficTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_ready_revision_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_created_revision_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traffic: Vec<TrafficTarget>,
}

/// The mutable template a service stamps revisions from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionTemplateSpec {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: RevisionSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSpec {
    #[serde(flatten)]
    pub pod: PodSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_concurrency: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_start_timeout_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout_seconds: Option<i64>,
}

/// One entry of a service's traffic block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_revision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TrafficTarget {
    /// The explicitly pinned revision name, ignoring empty strings.
    pub fn pinned_revision(&self) -> Option<&str> {
        self.revision_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn follows_latest(&self) -> bool {
        self.latest_revision.unwrap_or(false)
    }
}

/// An immutable snapshot of a service template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: RevisionSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RevisionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
}

impl Service {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Name of the revision the live template is pinned to, if any.
    pub fn template_name(&self) -> Option<&str> {
        self.spec.template.metadata.name.as_deref()
    }

    pub fn latest_ready_revision_name(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|status| status.latest_ready_revision_name.as_deref())
    }

    /// Fill in type metadata the API server leaves out.
    pub fn ensure_type_meta(&mut self) {
        if self.api_version.is_empty() {
            self.api_version = SERVING_API_VERSION.to_string();
        }
        if self.kind.is_empty() {
            self.kind = SERVICE_KIND.to_string();
        }
    }
}

impl Revision {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// The configuration generation, when the label is present and numeric.
    pub fn generation(&self) -> Option<i64> {
        self.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(CONFIGURATION_GENERATION_LABEL))
            .and_then(|value| value.parse().ok())
    }

    pub fn ensure_type_meta(&mut self) {
        if self.api_version.is_empty() {
            self.api_version = SERVING_API_VERSION.to_string();
        }
        if self.kind.is_empty() {
            self.kind = REVISION_KIND.to_string();
        }
    }
}

impl Resource for Service {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(SERVICE_KIND)
    }

    fn group(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(SERVING_GROUP)
    }

    fn version(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(SERVING_VERSION)
    }

    fn plural(_: &()) -> Cow<'_, str> {
        Cow::Borrowed("services")
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Resource for Revision {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(REVISION_KIND)
    }

    fn group(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(SERVING_GROUP)
    }

    fn version(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(SERVING_VERSION)
    }

    fn plural(_: &()) -> Cow<'_, str> {
        Cow::Borrowed("revisions")
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
