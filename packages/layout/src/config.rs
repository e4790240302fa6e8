use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::LayoutError;

pub const DEFAULT_CONFIG_NAME: &str = "doclayout.config.json";

/// Layout configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Mode used until the host requests another one
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Prefix joined in front of every layout href
    #[serde(default)]
    pub base_url: String,

    /// Optional name prefix of layout resources (`<prefix>-file-view-layout`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_prefix: Option<String>,

    /// Layout resource extension
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Key prefix for constraint-specific violation messages
    #[serde(default = "default_constraint_key_prefix")]
    pub constraint_key_prefix: String,

    /// Key of the inline message shown when a layout resource is missing
    #[serde(default = "default_layout_not_found_key")]
    pub layout_not_found_key: String,
}

fn default_mode() -> String {
    "view".to_string()
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_constraint_key_prefix() -> String {
    "label.schema.constraint.violation".to_string()
}

fn default_layout_not_found_key() -> String {
    "documentView.layoutNotFound".to_string()
}

impl LayoutConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> Result<Self, LayoutError> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(LayoutConfig::default())
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            base_url: String::new(),
            element_prefix: None,
            extension: default_extension(),
            constraint_key_prefix: default_constraint_key_prefix(),
            layout_not_found_key: default_layout_not_found_key(),
        }
    }
}
