pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod serving;
pub mod util;

pub use cli::{run_export, Cli, ExportRequest};
pub use config::Config;
pub use error::{ExportError, Result};
pub use export::{export_service, ExportArtifact, ExportMode, ExportOptions};
pub use output::OutputFormat;
pub use serving::{KubeServingClient, Revision, Service, ServingClient};
