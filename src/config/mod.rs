// Session configuration: API target, tokens and the targeted org/space
mod token;

pub use token::user_from_access_token;

use anyhow::{Context, Result};
use cf_models::{Organization, Space, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::command::Config;

pub const DEFAULT_BINARY_NAME: &str = "cf";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default)]
    pub organization_fields: Organization,
    #[serde(default)]
    pub space_fields: Space,
    #[serde(skip, default = "default_binary_name")]
    pub binary_name: String,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_binary_name() -> String {
    DEFAULT_BINARY_NAME.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            access_token: String::new(),
            refresh_token: String::new(),
            request_timeout: default_request_timeout(),
            organization_fields: Organization::default(),
            space_fields: Space::default(),
            binary_name: default_binary_name(),
        }
    }
}

impl CliConfig {
    /// Load the config from `$CF_HOME/.cf/config.toml` or `~/.cf/config.toml`.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// A missing file means a fresh session: no API target, not logged in.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .context(format!("Failed to read config file: {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {}", config_path.display()))?;

        tracing::debug!(
            path = %config_path.display(),
            target = %config.target,
            "loaded config"
        );

        Ok(config)
    }

    pub fn with_binary_name(mut self, binary_name: impl Into<String>) -> Self {
        self.binary_name = binary_name.into();
        self
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = match std::env::var_os("CF_HOME") {
            Some(cf_home) if !cf_home.is_empty() => PathBuf::from(cf_home),
            _ => dirs::home_dir().context("Failed to determine home directory")?,
        };
        Ok(home.join(".cf").join("config.toml"))
    }
}

impl Config for CliConfig {
    fn binary_name(&self) -> &str {
        &self.binary_name
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    fn targeted_organization(&self) -> &Organization {
        &self.organization_fields
    }

    fn targeted_space(&self) -> &Space {
        &self.space_fields
    }

    fn current_user(&self) -> Result<User> {
        user_from_access_token(&self.access_token)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
