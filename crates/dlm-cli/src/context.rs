use std::path::{Path, PathBuf};

use anyhow::Context;
use dlm_config::DlmConfig;
use dlm_schema::TemplateCatalog;

use crate::cli::GlobalFlags;

/// Loaded configuration shared by every command handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: DlmConfig,
}

impl AppContext {
    /// Load `.env`, then the layered configuration.
    pub fn load(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        let config = DlmConfig::load_from(flags.config.as_deref())
            .context("failed to load dlm configuration")?;
        Ok(Self { config })
    }

    pub fn templates_dir(&self, dir: Option<&Path>) -> PathBuf {
        dir.map_or_else(
            || PathBuf::from(&self.config.general.templates_dir),
            Path::to_path_buf,
        )
    }

    /// Load every template file from `dir`, or from the configured
    /// directory.
    pub fn catalog(&self, dir: Option<&Path>) -> anyhow::Result<TemplateCatalog> {
        let dir = self.templates_dir(dir);
        let catalog = TemplateCatalog::load_dir(&dir)
            .with_context(|| format!("failed to load templates from {}", dir.display()))?;
        tracing::debug!(
            dir = %dir.display(),
            files = catalog.files().len(),
            events = catalog.len(),
            "templates loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
impl AppContext {
    pub fn with_config(config: DlmConfig) -> Self {
        Self { config }
    }
}
