//! Configuration file support for rhsm-updates.
//!
//! Provides YAML-based configuration through `rhsm-updates.config.yml`
//! files, plus environment overrides, resolved into [`Settings`].
//!
//! Precedence: command line > environment > config file > defaults.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::network::{RhsmApiClient, SsoTokenClient};
use crate::shared::error::ReportError;
use crate::shared::security::validate_config_file;
use crate::shared::Result;
use crate::update_reporting::services::AccumulationMode;

pub const CONFIG_FILENAME: &str = "rhsm-updates.config.yml";

/// Overrides the SSO token endpoint
pub const AUTH_URL_ENV: &str = "RHSM_AUTH_URL";

/// Overrides the systems API base URL
pub const API_URL_ENV: &str = "RHSM_API_URL";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub auth_url: Option<String>,
    pub api_url: Option<String>,
    pub cumulative: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_config_file(path).map_err(|e| ReportError::Config {
        path: path.to_path_buf(),
        details: format!("Failed to read config file: {}", e),
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
        path: path.to_path_buf(),
        details: format!("Failed to read config file: {}", e),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            details: format!("Failed to parse config file: {}", e),
        })?;

    validate_config(&config).map_err(|details| ReportError::Config {
        path: path.to_path_buf(),
        details,
    })?;
    warn_unknown_fields(&config);

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> std::result::Result<(), String> {
    for (key, value) in [("auth_url", &config.auth_url), ("api_url", &config.api_url)] {
        if let Some(url) = value {
            validate_url(key, url)?;
        }
    }
    Ok(())
}

fn validate_url(key: &str, url: &str) -> std::result::Result<(), String> {
    if url.trim().is_empty() {
        return Err(format!("{} must not be empty", key));
    }
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(format!(
            "{} must be an http:// or https:// URL, got '{}'",
            key, url
        ));
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub auth_url: String,
    pub api_url: String,
    pub accumulation_mode: AccumulationMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_url: SsoTokenClient::DEFAULT_TOKEN_URL.to_string(),
            api_url: RhsmApiClient::DEFAULT_API_URL.to_string(),
            accumulation_mode: AccumulationMode::PerDevice,
        }
    }
}

impl Settings {
    /// Loads the explicit config file, or discovers one in the current
    /// directory, then applies environment and command-line overrides.
    pub fn load(explicit_config: Option<&Path>, cumulative_flag: bool) -> Result<Self> {
        let config = match explicit_config {
            Some(path) => Some(load_config_from_path(path)?),
            None => discover_config(&std::env::current_dir()?)?,
        };

        Self::resolve(config, |key| std::env::var(key).ok(), cumulative_flag)
    }

    /// Merges the sources without touching the process environment.
    ///
    /// `env` looks up a variable by name; blank values are ignored.
    pub fn resolve<F>(config: Option<ConfigFile>, env: F, cumulative_flag: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = config.unwrap_or_default();
        let defaults = Self::default();
        let from_env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let auth_url = from_env(AUTH_URL_ENV)
            .or(config.auth_url)
            .unwrap_or(defaults.auth_url);
        let api_url = from_env(API_URL_ENV)
            .or(config.api_url)
            .unwrap_or(defaults.api_url);

        for (key, url) in [(AUTH_URL_ENV, &auth_url), (API_URL_ENV, &api_url)] {
            validate_url(key, url).map_err(ReportError::validation)?;
        }

        let accumulation_mode = if cumulative_flag || config.cumulative.unwrap_or(false) {
            AccumulationMode::Cumulative
        } else {
            AccumulationMode::PerDevice
        };

        Ok(Self {
            auth_url,
            api_url,
            accumulation_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
auth_url: https://sso.example.test/token
api_url: https://api.example.test/management/v1/systems
cumulative: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.auth_url.as_deref(),
            Some("https://sso.example.test/token")
        );
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://api.example.test/management/v1/systems")
        );
        assert_eq!(config.cumulative, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "cumulative: false\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().cumulative, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_url: \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("api_url must not be empty"));
    }

    #[test]
    fn test_non_http_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "auth_url: ftp://sso.example.test\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("auth_url must be an http:// or https:// URL"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
cumulative: true
client_secret: nope
format: json
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("client_secret"));
        assert!(config.unknown_fields.contains_key("format"));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(None, no_env, false).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.accumulation_mode, AccumulationMode::PerDevice);
    }

    #[test]
    fn test_resolve_config_over_defaults() {
        let config = ConfigFile {
            api_url: Some("https://api.example.test/systems".to_string()),
            cumulative: Some(true),
            ..Default::default()
        };

        let settings = Settings::resolve(Some(config), no_env, false).unwrap();
        assert_eq!(settings.api_url, "https://api.example.test/systems");
        assert_eq!(settings.auth_url, SsoTokenClient::DEFAULT_TOKEN_URL);
        assert_eq!(settings.accumulation_mode, AccumulationMode::Cumulative);
    }

    #[test]
    fn test_resolve_env_over_config() {
        let config = ConfigFile {
            auth_url: Some("https://from-config.test/token".to_string()),
            ..Default::default()
        };
        let env = |key: &str| match key {
            AUTH_URL_ENV => Some("http://127.0.0.1:8080/token".to_string()),
            API_URL_ENV => Some("".to_string()),
            _ => None,
        };

        let settings = Settings::resolve(Some(config), env, false).unwrap();
        assert_eq!(settings.auth_url, "http://127.0.0.1:8080/token");
        assert_eq!(settings.api_url, RhsmApiClient::DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_invalid_env_url() {
        let env = |key: &str| (key == API_URL_ENV).then(|| "not-a-url".to_string());

        let err = Settings::resolve(None, env, false).unwrap_err();
        assert!(err.to_string().contains(API_URL_ENV));
    }

    #[test]
    fn test_cli_flag_enables_cumulative() {
        let config = ConfigFile {
            cumulative: Some(false),
            ..Default::default()
        };

        let settings = Settings::resolve(Some(config), no_env, true).unwrap();
        assert_eq!(settings.accumulation_mode, AccumulationMode::Cumulative);
    }
}
