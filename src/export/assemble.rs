//! Assembling the two export shapes from a selection.

use crate::export::artifact::{Export, ServiceList};
use crate::export::reconstruct::{export_revision, latest_service, service_from_revision};
use crate::export::select::RevisionSelection;
use crate::serving::Service;

/// Import-mode export. `history` is `None` when revisions were not requested.
pub fn export_for_import(service: &Service, history: Option<&RevisionSelection>) -> Export {
    let (revisions, total) = match history {
        Some(selection) => (
            selection.historical(service).map(export_revision).collect(),
            selection.total(),
        ),
        None => (Vec::new(), 0),
    };

    Export::new(latest_service(service, total > 1), revisions)
}

/// Replay-mode export: one service per routed historical revision, then the
/// latest service last.
pub fn export_for_replay(service: &Service, history: &RevisionSelection) -> ServiceList {
    let mut items: Vec<Service> = history
        .historical(service)
        .map(|revision| service_from_revision(service, revision))
        .collect();
    items.push(latest_service(service, history.total() > 1));

    ServiceList::new(items)
}
