//! Documentation output configuration.

use serde::{Deserialize, Serialize};

fn default_out_dir() -> String {
    "docs".to_string()
}

fn default_html_file() -> String {
    "events.html".to_string()
}

fn default_merged_file() -> String {
    "all_events.md".to_string()
}

fn default_title() -> String {
    "Data Layer Events".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Directory Markdown files are written to.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// File name of the single-page HTML reference.
    #[serde(default = "default_html_file")]
    pub html_file: String,

    /// File name used when all templates are merged into one Markdown file.
    #[serde(default = "default_merged_file")]
    pub merged_file: String,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            html_file: default_html_file(),
            merged_file: default_merged_file(),
            title: default_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DocsConfig::default();
        assert_eq!(config.out_dir, "docs");
        assert_eq!(config.html_file, "events.html");
        assert_eq!(config.merged_file, "all_events.md");
        assert_eq!(config.title, "Data Layer Events");
    }
}
