use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "trivy-sonar.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub anchor: Option<AnchorConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnchorConfig {
    /// Fallback anchor candidate checked for in the working directory.
    pub file: Option<String>,
    /// Build-context substring matched against each result's target.
    pub marker: Option<String>,
}

pub fn load_config(root: &Path) -> Result<Option<ConvertConfig>> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let cfg: ConvertConfig = toml::from_str(&content)
        .map_err(|e| ConvertError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(cfg))
}
