//! # dlm-config
//!
//! Layered configuration loading for the data layer manager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DLM_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`DlmConfig::load_from`]
//! 3. Project-level `./dlm.toml`
//! 4. User-level `~/.config/dlm/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `DLM_DISPATCH__CLASSIFICATION_FIELD` to
//! `dispatch.classification_field` and `DLM_DOCS__OUT_DIR` to `docs.out_dir`.
//!
//! ```no_run
//! use dlm_config::DlmConfig;
//!
//! let config = DlmConfig::load_with_dotenv().expect("config");
//! println!("templates: {}", config.general.templates_dir);
//! ```

mod dispatch;
mod docs;
mod error;
mod general;

pub use dispatch::DispatchConfig;
pub use docs::DocsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "dlm.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DlmConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub docs: DocsConfig,
}

impl DlmConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `file` above the discovered TOML files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain without an explicit file.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain with an optional explicit file.
    #[must_use]
    pub fn figment_with(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(file) = file {
            figment = figment.merge(Toml::file_exact(file));
        }

        figment.merge(Env::prefixed("DLM_").split("__"))
    }

    /// Reject values that would make every later operation fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.templates_dir.trim().is_empty() {
            return Err(ConfigError::invalid(
                "general.templates_dir",
                "must not be empty",
            ));
        }
        if self.dispatch.classification_field.trim().is_empty() {
            return Err(ConfigError::invalid(
                "dispatch.classification_field",
                "must not be empty",
            ));
        }
        if self.dispatch.default_page.trim().is_empty() {
            return Err(ConfigError::invalid(
                "dispatch.default_page",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dlm").join("config.toml"))
    }
}
