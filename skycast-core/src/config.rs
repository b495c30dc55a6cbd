use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::locale::Lang;

/// Environment variable that overrides the stored geocoding API key.
pub const API_KEY_ENV: &str = "SKYCAST_GEOCODING_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Credentials for the geocoding provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default language tag, e.g. "en", "pt" or "es".
    pub default_lang: Option<String>,

    /// Overrides for the provider endpoints.
    pub forecast_url: Option<String>,
    pub geocoding_url: Option<String>,

    /// Directory holding `{lang}.json` dictionaries replacing the bundled ones.
    pub locale_dir: Option<PathBuf>,

    pub request_timeout_secs: Option<u64>,

    /// Start with the expanded (two-hour) hourly view.
    #[serde(default)]
    pub show_more: bool,

    /// Example TOML:
    /// [geocoding]
    /// api_key = "..."
    pub geocoding: Option<ProviderConfig>,
}

impl Config {
    /// Return the default language, falling back to English when unset.
    pub fn default_lang(&self) -> Result<Lang> {
        match self.default_lang.as_deref() {
            Some(tag) => Lang::try_from(tag)
                .with_context(|| format!("Invalid default_lang '{tag}' in config")),
            None => Ok(Lang::default()),
        }
    }

    pub fn set_default_lang(&mut self, lang: Lang) {
        self.default_lang = Some(lang.as_str().to_string());
    }

    pub fn set_geocoding_api_key(&mut self, api_key: String) {
        self.geocoding = Some(ProviderConfig { api_key });
    }

    /// Returns the geocoding API key, if present.
    pub fn geocoding_api_key(&self) -> Option<&str> {
        self.geocoding
            .as_ref()
            .map(|cfg| cfg.api_key.as_str())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn is_geocoding_configured(&self) -> bool {
        self.geocoding_api_key().is_some()
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Load config from the platform config path, or an empty default if it
    /// doesn't exist yet, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&Self::config_file_path()?)?;

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            cfg.apply_env_api_key(key);
        }

        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    fn apply_env_api_key(&mut self, key: String) {
        if !key.trim().is_empty() {
            self.set_geocoding_api_key(key);
        }
    }
}
