//! Conversion configuration for the legacy (no application) mode
//!
//! A JDL model without `application` blocks does not say which application it
//! belongs to. Those parameters come from a TOML file that sits alongside the
//! model, and can be overridden from the command line.
//!
//! ```toml
//! application_name = "library"
//! application_type = "microservice"
//! database_type = "sql"
//! creation_timestamp = "2019-01-01T09:30:00Z"
//! ```

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{ApplicationType, DatabaseType};

/// File name looked up next to the model
pub const CONFIG_FILE_NAME: &str = "jdl-json.toml";

/// Parameters of a conversion, every one optional until merged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type: Option<ApplicationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_type: Option<DatabaseType>,
    /// RFC 3339 timestamp seeding the changelog dates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
}

impl ConversionConfig {
    /// Values set in `overrides` replace the ones of `self`
    pub fn merged_with(self, overrides: ConversionConfig) -> Self {
        ConversionConfig {
            application_name: overrides.application_name.or(self.application_name),
            application_type: overrides.application_type.or(self.application_type),
            database_type: overrides.database_type.or(self.database_type),
            creation_timestamp: overrides.creation_timestamp.or(self.creation_timestamp),
        }
    }

    /// The creation timestamp as UTC, `None` when not configured
    pub fn creation_timestamp_utc(&self) -> anyhow::Result<Option<DateTime<Utc>>> {
        self.creation_timestamp
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|t| t.with_timezone(&Utc))
                    .with_context(|| format!("Invalid creation timestamp '{}', expected RFC 3339", raw))
            })
            .transpose()
    }
}

/// Load a conversion config from a TOML file
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// cannot be read or parsed.
pub fn load_conversion_config(config_path: &Path) -> anyhow::Result<Option<ConversionConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read conversion config: {}", config_path.display()))?;

    let config: ConversionConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse conversion config: {}", config_path.display()))?;

    Ok(Some(config))
}

/// `jdl-json.toml` in the directory of the model, if present
pub fn auto_detect_config_path(model_path: &Path) -> Option<PathBuf> {
    let config_path = model_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected alongside the model
/// 3. None (no config)
pub fn resolve_config_path(explicit_path: Option<&Path>, model_path: &Path) -> Option<PathBuf> {
    match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => auto_detect_config_path(model_path),
    }
}
