//! Configuration management for the sandbox file manager
//!
//! Loads settings from config.toml with environment overrides. All values
//! have defaults so the manager can run without a config file at all.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

fn default_working_root() -> String {
    "data".to_string()
}

fn default_prompt() -> String {
    ">>> ".to_string()
}

/// Manager configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct ManagerConfig {
    /// Root directory of the sandbox; created on disk if absent
    #[serde(default = "default_working_root")]
    pub working_root: String,

    /// Prompt shown before each command line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            working_root: default_working_root(),
            prompt: default_prompt(),
        }
    }
}

impl ManagerConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// A missing config file falls back to defaults; a malformed one is an
    /// error. Environment variables use the SANDBOX_FM prefix, e.g.
    /// SANDBOX_FM_WORKING_ROOT.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("working_root", default_working_root())?
            .set_default("prompt", default_prompt())?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("SANDBOX_FM"))
            .build()?;

        let config: ManagerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.working_root.is_empty() {
            return Err(config::ConfigError::Message(
                "working_root cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Get working root as PathBuf
    pub fn working_root_path(&self) -> PathBuf {
        PathBuf::from(&self.working_root)
    }
}
