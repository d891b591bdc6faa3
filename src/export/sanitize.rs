//! Removal of server-managed metadata from exported objects.

use std::collections::BTreeMap;

use crate::serving::{Revision, RevisionTemplateSpec, Service};

/// Annotation keys dropped from service metadata.
pub const IGNORED_SERVICE_ANNOTATIONS: &[&str] = &[
    "serving.knative.dev/creator",
    "serving.knative.dev/lastModifier",
    "kubectl.kubernetes.io/last-applied-configuration",
];

/// Annotation keys dropped from revisions and revision templates.
pub const IGNORED_REVISION_ANNOTATIONS: &[&str] = &[
    "serving.knative.dev/lastPinned",
    "serving.knative.dev/creator",
    "serving.knative.dev/routingStateModified",
    UPDATE_TIMESTAMP_ANNOTATION,
];

/// Label keys dropped from service metadata.
pub const IGNORED_SERVICE_LABELS: &[&str] = &[
    "serving.knative.dev/configurationUID",
    "serving.knative.dev/serviceUID",
];

/// Label keys dropped from revisions and revision templates.
pub const IGNORED_REVISION_LABELS: &[&str] = &[
    "serving.knative.dev/configurationUID",
    "serving.knative.dev/serviceUID",
];

/// Set by the client whenever it updates a service.
pub const UPDATE_TIMESTAMP_ANNOTATION: &str = "client.knative.dev/updateTimestamp";

/// Delete `keys` from `map`; a map left empty becomes `None`.
fn strip_keys(map: &mut Option<BTreeMap<String, String>>, keys: &[&str]) {
    if let Some(entries) = map {
        for key in keys {
            entries.remove(*key);
        }
        if entries.is_empty() {
            *map = None;
        }
    }
}

pub fn sanitize_service(service: &mut Service) {
    strip_keys(
        &mut service.metadata.annotations,
        IGNORED_SERVICE_ANNOTATIONS,
    );
    strip_keys(&mut service.metadata.labels, IGNORED_SERVICE_LABELS);
}

pub fn sanitize_revision(revision: &mut Revision) {
    strip_revision_annotations(revision);
    strip_keys(&mut revision.metadata.labels, IGNORED_REVISION_LABELS);
}

pub fn strip_revision_annotations(revision: &mut Revision) {
    strip_keys(
        &mut revision.metadata.annotations,
        IGNORED_REVISION_ANNOTATIONS,
    );
}

/// Templates are revisions-to-be, so they get the revision deny-lists.
pub fn sanitize_template(template: &mut RevisionTemplateSpec) {
    strip_keys(
        &mut template.metadata.annotations,
        IGNORED_REVISION_ANNOTATIONS,
    );
    strip_template_labels(template);
}

pub fn strip_template_labels(template: &mut RevisionTemplateSpec) {
    strip_keys(&mut template.metadata.labels, IGNORED_REVISION_LABELS);
}
