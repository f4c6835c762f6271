use crate::types::{ContentType, HttpMethod};
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub request: RequestDefaults,
    pub http: HttpConfig,
    pub log: LogConfig,
}

/// Initial form values, also used when the form is cleared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub default_url: Option<String>,
    pub default_method: HttpMethod,
    pub default_content_type: ContentType,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            default_url: None,
            default_method: HttpMethod::Get,
            default_content_type: ContentType::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// No client-side timeout unless set
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("api-tester/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file path, defaults to `api-tester.log` in the temp dir
    pub file: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir
            .join(".config")
            .join("api-tester")
            .join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.request.default_method, HttpMethod::Get);
        assert_eq!(config.request.default_content_type, ContentType::Json);
        assert!(config.http.timeout_secs.is_none());
        assert!(config.http.user_agent.starts_with("api-tester/"));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [request]
            default_url = "https://httpbin.org/anything"
            default_method = "POST"
            default_content_type = "application/x-www-form-urlencoded"

            [http]
            timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(
            config.request.default_url.as_deref(),
            Some("https://httpbin.org/anything")
        );
        assert_eq!(config.request.default_method, HttpMethod::Post);
        assert_eq!(
            config.request.default_content_type,
            ContentType::FormUrlEncoded
        );
        assert_eq!(config.http.timeout_secs, Some(30));
        // Unset fields keep their defaults
        assert!(config.http.user_agent.starts_with("api-tester/"));
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_invalid_method_rejected() {
        let result = Config::from_toml(
            r#"
            [request]
            default_method = "FETCH"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_location() {
        if let Ok(path) = Config::config_path() {
            assert!(path.ends_with(".config/api-tester/config.toml"));
        }
    }
}
