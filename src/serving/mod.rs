pub mod client;
pub mod mock;
pub mod types;

pub use client::{KubeServingClient, ServingClient};
pub use types::{
    Revision, RevisionSpec, RevisionStatus, RevisionTemplateSpec, Service, ServiceSpec,
    ServiceStatus, TrafficTarget, CONFIGURATION_GENERATION_LABEL, SERVICE_LABEL,
    SERVING_API_VERSION,
};
