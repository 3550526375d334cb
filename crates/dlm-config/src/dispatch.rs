//! Event dispatch configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_classification_field() -> String {
    "custom_section".to_string()
}

fn default_page() -> String {
    "home".to_string()
}

fn default_event_log() -> String {
    "dlm-events.jsonl".to_string()
}

/// How pushed payloads are classified and where they are logged.
///
/// Section resolution maps the first segment of a page path to a page code
/// through `pages`, then the page code to a label through `sections`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Payload field stamped with the page section when the caller leaves it
    /// empty.
    #[serde(default = "default_classification_field")]
    pub classification_field: String,

    /// Segment used for the site root (`/`) and for unmapped segments.
    #[serde(default = "default_page")]
    pub default_page: String,

    /// First path segment to page code, e.g. `products = "pdp"`.
    #[serde(default)]
    pub pages: BTreeMap<String, String>,

    /// Page code to section label, e.g. `pdp = "product-detail"`.
    #[serde(default)]
    pub sections: BTreeMap<String, String>,

    /// JSONL file that accepted payloads are appended to.
    #[serde(default = "default_event_log")]
    pub event_log: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            classification_field: default_classification_field(),
            default_page: default_page(),
            pages: BTreeMap::new(),
            sections: BTreeMap::new(),
            event_log: default_event_log(),
        }
    }
}
