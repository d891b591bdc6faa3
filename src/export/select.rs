//! Picking and ordering the revisions that make it into an export.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::error::{ExportError, Result};
use crate::serving::{Revision, Service, ServingClient};

/// Sorted revision history of a service plus the names its traffic pins.
#[derive(Debug, Clone, Default)]
pub struct RevisionSelection {
    /// Every revision of the service, oldest generation first.
    pub revisions: Vec<Revision>,
    pub routed: HashSet<String>,
}

impl RevisionSelection {
    pub fn is_routed(&self, name: &str) -> bool {
        self.routed.contains(name)
    }

    /// Routed revisions other than the one the live template points at, in order.
    pub fn historical<'a>(
        &'a self,
        service: &'a Service,
    ) -> impl Iterator<Item = &'a Revision> + 'a {
        let current = service.template_name();
        self.revisions
            .iter()
            .filter(move |revision| {
                self.is_routed(revision.name()) && Some(revision.name()) != current
            })
    }

    /// Size of the full history, routed or not.
    pub fn total(&self) -> usize {
        self.revisions.len()
    }
}

/// Names of revisions pinned by the service's traffic block.
///
/// Targets that only follow the latest revision contribute nothing.
pub fn routed_revisions(service: &Service) -> HashSet<String> {
    service
        .spec
        .traffic
        .iter()
        .filter_map(|target| target.pinned_revision())
        .map(str::to_string)
        .collect()
}

/// Fetch the revision history of `service` and put it in export order.
pub async fn revisions_to_export<C>(client: &C, service: &Service) -> Result<RevisionSelection>
where
    C: ServingClient + ?Sized,
{
    let routed = routed_revisions(service);

    let mut revisions = client.list_revisions(service.name()).await?;
    if revisions.is_empty() {
        return Err(ExportError::NoRevisions {
            service: service.name().to_string(),
        });
    }

    sort_revisions(&mut revisions);
    debug!(
        service = %service.name(),
        total = revisions.len(),
        routed = routed.len(),
        "Selected revisions for export"
    );

    Ok(RevisionSelection { revisions, routed })
}

/// Order revisions by generation, then by name.
///
/// The comparison is not transitive once some generation labels are missing,
/// so this is a plain stable insertion sort rather than `slice::sort_by`.
pub fn sort_revisions(revisions: &mut [Revision]) {
    for i in 1..revisions.len() {
        let mut j = i;
        while j > 0 && compare_revisions(&revisions[j], &revisions[j - 1]) == Ordering::Less {
            revisions.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Ascending generation; descending name on ties or when either generation
/// is unusable.
pub fn compare_revisions(a: &Revision, b: &Revision) -> Ordering {
    match (a.generation(), b.generation()) {
        (Some(a_gen), Some(b_gen)) if a_gen != b_gen => a_gen.cmp(&b_gen),
        _ => b.name().cmp(a.name()),
    }
}
