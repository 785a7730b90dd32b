//! Configuration file support for cyclonedx-cocoapods.
//!
//! Provides YAML-based configuration through `cyclonedx-cocoapods.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::sbom_generation::domain::TargetDeclaration;
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cyclonedx-cocoapods.config.yml";

/// Top-level configuration file schema.
///
/// Every field mirrors a command-line option; values given on the command
/// line take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub bom_version: Option<i64>,
    pub spec_version: Option<String>,
    pub exclude_test_targets: Option<bool>,
    pub shortened_strings: Option<i64>,
    pub component: Option<ComponentConfig>,
    pub manufacturer: Option<ManufacturerConfig>,
    pub podspec_dirs: Option<Vec<PathBuf>>,
    pub targets: Option<Vec<TargetConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Metadata of the artifact the BOM describes.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ComponentConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    pub group: Option<String>,
    pub source: Option<String>,
    pub build: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ManufacturerConfig {
    pub name: Option<String>,
    pub url: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A build target and the pods it declares directly.
#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    pub label: String,
    #[serde(default)]
    pub pods: Vec<String>,
}

impl ConfigFile {
    /// Target declarations, if the file configures any.
    pub fn target_declarations(&self) -> Option<Vec<TargetDeclaration>> {
        self.targets.as_ref().map(|targets| {
            targets
                .iter()
                .map(|t| TargetDeclaration::new(t.label.trim(), t.pods.clone()))
                .collect()
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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
    if let Some(ref targets) = config.targets {
        for (i, target) in targets.iter().enumerate() {
            if target.label.trim().is_empty() {
                return Err(SbomError::Validation {
                    message: format!(
                        "Invalid config: targets[{}].label must not be empty.\n\n\
                         💡 Hint: Each target entry needs a non-empty 'label' (e.g., \"App\").",
                        i
                    ),
                }
                .into());
            }
        }
    }

    if let Some(ref dirs) = config.podspec_dirs {
        if dirs.iter().any(|dir| dir.as_os_str().is_empty()) {
            return Err(SbomError::Validation {
                message: "Invalid config: podspec_dirs entries must not be empty.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
