//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_templates_dir() -> String {
    "templates".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding the `*.json` event template files.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
        }
    }
}
