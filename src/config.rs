//! Configuration file support for license-notice.
//!
//! Provides YAML-based configuration through `license-notice.config.yml`
//! files and the merge of file values with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::DEFAULT_ENDPOINT;
use crate::application::dto::FetchMode;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-notice.config.yml";

/// Analysis output read when neither the CLI nor the config file names one
pub const DEFAULT_ANALYSIS_PATH: &str = ".license-notice/analysis.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub include_unknown: Option<bool>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub analysis: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file", MAX_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(endpoint) = &config.endpoint {
        if endpoint.trim().is_empty() {
            bail!(
                "Invalid config: endpoint must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default ({}), or set a full URL.",
                DEFAULT_ENDPOINT
            );
        }
    }
    for (key, value) in [
        ("template", &config.template),
        ("output", &config.output),
        ("analysis", &config.analysis),
    ] {
        if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key or set a file path.",
                key
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None` / `false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub include_unknown: bool,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub analysis: Option<PathBuf>,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub fetch_mode: FetchMode,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub analysis: PathBuf,
}

impl Settings {
    /// Merges CLI overrides over the config file over built-in defaults
    pub fn resolve(overrides: ConfigOverrides, file: Option<ConfigFile>) -> Self {
        let file = file.unwrap_or_default();

        let include_unknown = overrides.include_unknown || file.include_unknown.unwrap_or(false);

        Self {
            endpoint: overrides
                .endpoint
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            fetch_mode: FetchMode::from_include_unknown(include_unknown),
            template: overrides.template.or(file.template),
            output: overrides.output.or(file.output),
            analysis: overrides
                .analysis
                .or(file.analysis)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ANALYSIS_PATH)),
        }
    }
}
