use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::export::ExportMode;
use crate::output::OutputFormat;
use crate::util::paths::config_path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Namespace used when `--namespace` is not given
    pub namespace: Option<String>,
    /// Kubeconfig context used when `--context` is not given
    pub context: Option<String>,
    /// Output format used when `--output` is not given
    pub output: Option<OutputFormat>,
    /// Mode used when `--mode` is not given
    pub mode: ExportMode,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub namespace: Option<String>,
    pub context: Option<String>,
    pub output: Option<OutputFormat>,
    pub mode: Option<ExportMode>,
}

impl Config {
    /// Load from the default config path (~/.kn-export/config.toml).
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        if !path.exists() {
            return config;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file");
                return config;
            }
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => {
                config.namespace = toml_config.namespace.filter(|ns| !ns.is_empty());
                config.context = toml_config.context.filter(|ctx| !ctx.is_empty());
                config.output = toml_config.output;
                if let Some(mode) = toml_config.mode {
                    config.mode = mode;
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
            }
        }

        config
    }
}
