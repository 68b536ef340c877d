use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    aligner::DEFAULT_WINDOW,
    conditions::Language,
    openmeteo::{FORECAST_URL, GEOCODING_URL, parse_endpoint},
};

/// Largest daily window the forecast service can fill.
pub const MAX_FORECAST_DAYS: usize = 16;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// language = "en"
/// forecast_days = 3
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,

    /// Geocoding language hint and description language.
    pub language: Language,

    /// How many days after today to show.
    pub forecast_days: usize,

    /// Per-request timeout; no timeout when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            language: Language::default(),
            forecast_days: DEFAULT_WINDOW,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Check values that TOML alone cannot constrain.
    pub fn validate(&self) -> Result<()> {
        parse_endpoint(&self.geocoding_url)?;
        parse_endpoint(&self.forecast_url)?;

        if !(1..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            bail!(
                "forecast_days must be between 1 and {MAX_FORECAST_DAYS}, got {}",
                self.forecast_days
            );
        }

        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be positive when set");
        }

        Ok(())
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

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
        let dirs = ProjectDirs::from("dev", "clima", "clima-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();

        assert_eq!(cfg.geocoding_url, GEOCODING_URL);
        assert_eq!(cfg.forecast_url, FORECAST_URL);
        assert_eq!(cfg.language, Language::Pt);
        assert_eq!(cfg.forecast_days, 5);
        assert_eq!(cfg.timeout_secs, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str("language = \"en\"\nforecast_days = 3\n").unwrap();

        assert_eq!(cfg.language, Language::En);
        assert_eq!(cfg.forecast_days, 3);
        assert_eq!(cfg.forecast_url, FORECAST_URL);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config { timeout_secs: Some(10), language: Language::En, ..Config::default() };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert_eq!(back, cfg);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_days = Config { forecast_days: 0, ..Config::default() };
        assert!(zero_days.validate().unwrap_err().to_string().contains("forecast_days"));

        let too_many = Config { forecast_days: 17, ..Config::default() };
        assert!(too_many.validate().is_err());

        let bad_url = Config { geocoding_url: "geocoder".into(), ..Config::default() };
        assert!(bad_url.validate().unwrap_err().to_string().contains("Invalid endpoint URL"));

        let zero_timeout = Config { timeout_secs: Some(0), ..Config::default() };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn unknown_language_fails_to_parse() {
        assert!(toml::from_str::<Config>("language = \"fr\"").is_err());
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("clima-config-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        let cfg = Config { forecast_days: 7, ..Config::default() };
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("clima-config-test-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
