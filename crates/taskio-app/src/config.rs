use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use taskio_client::DEFAULT_BASE_URL;

use crate::theme::Theme;

const CONFIG_DIR: &str = "taskio";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "TASKIO_API_URL";

/// Application configuration stored in `<config-dir>/taskio/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// `[api]` section.
    #[serde(default)]
    pub api: ApiConfig,
    /// `[ui]` section.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for reaching the task service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task service; the built-in default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Active color scheme.
    #[serde(default)]
    pub theme: Theme,
}

impl AppConfig {
    /// Load from the user's configuration directory, defaulting when the
    /// file (or the platform's config directory) is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self> {
        Self::config_path().map_or_else(|| Ok(Self::default()), |path| Self::from_path(&path))
    }

    /// Load from an explicit file path; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Persist to the user's configuration directory.
    ///
    /// # Errors
    /// Returns an error if no configuration directory exists or writing fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no configuration directory available")?;
        self.save_to(&path)
    }

    /// Persist to an explicit file path, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("failed to serialize configuration")?;
        fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Location of the configuration file, if the platform defines one.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Effective API base URL: CLI flag, then `TASKIO_API_URL`, then the
    /// configured value, then the built-in default.
    #[must_use]
    pub fn base_url(&self, flag: Option<&str>) -> String {
        self.base_url_from(flag, env::var(API_URL_ENV).ok().as_deref())
    }

    fn base_url_from(&self, flag: Option<&str>, env_value: Option<&str>) -> String {
        flag.map(str::trim)
            .filter(|value| !value.is_empty())
            .or_else(|| env_value.map(str::trim).filter(|value| !value.is_empty()))
            .or_else(|| {
                self.api
                    .base_url
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or(DEFAULT_BASE_URL)
            .to_owned()
    }

    fn validate(&self) -> Result<()> {
        if let Some(url) = self.api.base_url.as_deref() {
            let trimmed = url.trim();
            if trimmed.is_empty() {
                bail!("api.base_url must not be empty");
            }
            if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                bail!("api.base_url must start with http:// or https://: {trimmed}");
            }
        }
        Ok(())
    }
}
