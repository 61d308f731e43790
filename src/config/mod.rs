#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, DateStyle};
use crate::utils::error::Result;
use crate::utils::secret::ApiKey;
use crate::utils::validation::{validate_range, validate_socket_addr, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved server settings handed to the gateway at construction.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub api_endpoint: String,
    pub api_key: Option<ApiKey>,
    pub timeout_seconds: u64,
    pub date_style: DateStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            date_style: DateStyle::default(),
        }
    }
}

/// Command-line or environment values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub date_style: Option<DateStyle>,
}

impl Settings {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = ApiKey::from_optional(Some(api_key.into()));
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Layers defaults, then the TOML file, then overrides.
    pub fn resolve(file: Option<TomlConfig>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        Self {
            bind: overrides
                .bind
                .or(file.server.bind)
                .unwrap_or(defaults.bind),
            api_endpoint: overrides
                .api_endpoint
                .or(file.provider.endpoint)
                .unwrap_or(defaults.api_endpoint),
            api_key: ApiKey::from_optional(overrides.api_key)
                .or_else(|| ApiKey::from_optional(file.provider.api_key)),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.provider.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
            date_style: overrides
                .date_style
                .or(file.display.date_style)
                .unwrap_or(defaults.date_style),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    fn request_timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(self.timeout_seconds))
    }

    fn date_style(&self) -> DateStyle {
        self.date_style
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind)?;
        validate_url("provider.endpoint", &self.api_endpoint)?;
        validate_range(
            "provider.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, Overrides::default());

        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.api_endpoint(), DEFAULT_ENDPOINT);
        assert!(settings.api_key.is_none());
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(settings.date_style, DateStyle::Us);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_overrides_take_precedence_over_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:8080"

[provider]
endpoint = "https://file.example.com"
api_key = "file-key"
timeout_seconds = 10

[display]
date_style = "eu"
"#,
        )
        .unwrap();

        let overrides = Overrides {
            api_key: Some("cli-key".to_string()),
            timeout_seconds: Some(5),
            ..Default::default()
        };
        let settings = Settings::resolve(Some(file), overrides);

        assert_eq!(settings.bind, "0.0.0.0:8080");
        assert_eq!(settings.api_endpoint, "https://file.example.com");
        assert_eq!(settings.api_key.unwrap().expose_secret(), "cli-key");
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.date_style, DateStyle::Eu);
    }

    #[test]
    fn test_blank_override_falls_back_to_file_key() {
        let file = TomlConfig::from_toml_str("[provider]\napi_key = \"file-key\"\n").unwrap();
        let overrides = Overrides {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(Some(file), overrides);
        assert_eq!(settings.api_key.unwrap().expose_secret(), "file-key");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_endpoint = Settings::default().with_endpoint("ftp://whois.example.com");
        assert!(bad_endpoint.validate().is_err());

        let bad_timeout = Settings {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(bad_timeout.validate().is_err());

        let bad_bind = Settings {
            bind: "not an address".to_string(),
            ..Default::default()
        };
        assert!(bad_bind.validate().is_err());
    }

    #[test]
    fn test_debug_output_hides_key() {
        let settings = Settings::default().with_api_key("super-secret");
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
