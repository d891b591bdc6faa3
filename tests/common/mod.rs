//! Shared test utilities for kn-export
//!
//! Builders for Knative services and revisions in the shapes the API server
//! returns them.

pub mod fixtures;
