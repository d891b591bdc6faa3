//! Rebuilding standalone service and revision objects for export.
//!
//! Every builder borrows its inputs and returns a fresh object, so one
//! fetched service can feed any number of reconstructions.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::export::sanitize::{
    sanitize_revision, sanitize_service, sanitize_template, strip_revision_annotations,
    strip_template_labels,
};
use crate::serving::{Revision, RevisionTemplateSpec, Service, ServiceSpec};

/// Name, labels and annotations only.
fn identity_meta(meta: &ObjectMeta) -> ObjectMeta {
    ObjectMeta {
        name: meta.name.clone(),
        labels: meta.labels.clone(),
        annotations: meta.annotations.clone(),
        ..Default::default()
    }
}

/// The service as it stands now.
///
/// With `with_routes`, the traffic block is carried over and targets that
/// follow the latest revision are pinned to the latest ready revision name,
/// so the export does not depend on what the target cluster considers latest.
pub fn latest_service(service: &Service, with_routes: bool) -> Service {
    let mut exported = Service {
        api_version: service.api_version.clone(),
        kind: service.kind.clone(),
        metadata: identity_meta(&service.metadata),
        spec: ServiceSpec {
            template: service.spec.template.clone(),
            traffic: Vec::new(),
        },
        status: None,
    };

    if with_routes {
        exported.spec.traffic = service.spec.traffic.clone();
        for target in &mut exported.spec.traffic {
            if target.follows_latest() {
                target.revision_name = service.latest_ready_revision_name().map(str::to_string);
            }
        }
    }

    sanitize_service(&mut exported);
    sanitize_template(&mut exported.spec.template);
    exported
}

/// The service as it stood when `revision` was its template.
///
/// Template metadata comes from the live template, but carries the
/// revision's (sanitized) annotations and name.
pub fn service_from_revision(service: &Service, revision: &Revision) -> Service {
    let mut annotated = revision.clone();
    strip_revision_annotations(&mut annotated);

    let mut template = RevisionTemplateSpec {
        metadata: service.spec.template.metadata.clone(),
        spec: annotated.spec,
    };
    template.metadata.annotations = annotated.metadata.annotations;
    template.metadata.name = annotated.metadata.name;
    strip_template_labels(&mut template);

    let mut exported = Service {
        api_version: service.api_version.clone(),
        kind: service.kind.clone(),
        metadata: identity_meta(&service.metadata),
        spec: ServiceSpec {
            template,
            traffic: Vec::new(),
        },
        status: None,
    };
    sanitize_service(&mut exported);
    exported
}

/// Bare revision shape for import-mode history.
pub fn export_revision(revision: &Revision) -> Revision {
    let mut exported = Revision {
        api_version: revision.api_version.clone(),
        kind: revision.kind.clone(),
        metadata: identity_meta(&revision.metadata),
        spec: revision.spec.clone(),
        status: None,
    };
    sanitize_revision(&mut exported);
    exported
}
