use anyhow::Context;
use std::path::Path;

use super::object::JdlObject;

/// Serialization of a JDL model document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Yaml,
}

impl ModelFormat {
    /// `.yaml` and `.yml` files are YAML, anything else is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => ModelFormat::Yaml,
            _ => ModelFormat::Json,
        }
    }
}

/// Load a parsed JDL model from a YAML or JSON file
pub fn load_model(file_path: &Path) -> anyhow::Result<JdlObject> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read JDL model: {}", file_path.display()))?;
    load_model_from_str(&content, ModelFormat::from_path(file_path))
        .with_context(|| format!("Failed to parse JDL model: {}", file_path.display()))
}

/// Parse a JDL model document already held in memory
pub fn load_model_from_str(content: &str, format: ModelFormat) -> anyhow::Result<JdlObject> {
    let object: JdlObject = match format {
        ModelFormat::Yaml => serde_yaml::from_str(content)?,
        ModelFormat::Json => serde_json::from_str(content)?,
    };
    Ok(object)
}
