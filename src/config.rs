//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cloud-discovery/cloud-discovery.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `CLOUD_DISCOVERY_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Region used when nothing else is configured.
pub const DEFAULT_AWS_REGION: &str = "eu-central-1";

/// Output format used when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "json";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "CLOUD_DISCOVERY";

/// Unified configuration for cloud-discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Target AWS region (default: eu-central-1)
    pub aws_region: String,
    /// Output format, `json` or `query` (default: json)
    pub output: String,
    /// Service endpoint override, e.g. a local AWS emulator
    pub endpoint_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aws_region: DEFAULT_AWS_REGION.into(),
            output: DEFAULT_OUTPUT.into(),
            endpoint_url: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub aws_region: Option<String>,
    pub output: Option<String>,
    pub endpoint_url: Option<String>,
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Get the XDG config directory for cloud-discovery.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cloud-discovery").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cloud-discovery.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            aws_region: overlay
                .aws_region
                .clone()
                .unwrap_or_else(|| self.aws_region.clone()),
            output: overlay.output.clone().unwrap_or_else(|| self.output.clone()),
            endpoint_url: overlay
                .endpoint_url
                .clone()
                .or_else(|| self.endpoint_url.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            debug!("load: explicit config {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply CLOUD_DISCOVERY_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("aws_region") {
            settings.aws_region = val;
        }
        if let Ok(val) = config.get_string("output") {
            settings.output = val;
        }
        if let Ok(val) = config.get_string("endpoint_url") {
            settings.endpoint_url = Some(val);
        }

        Ok(settings)
    }

    /// Render effective settings as TOML (`--print-config`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
