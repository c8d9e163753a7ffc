/*
[INPUT]:  YAML configuration file and environment variables
[OUTPUT]: Parsed CLI configuration and a ready client
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, Result, bail};
use kryptono_adapter::auth::credentials::{API_KEY_ENV, API_SECRET_ENV};
use kryptono_adapter::{ApiEndpoints, ClientConfig, Credentials, KryptonoClient, RequestWindow};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key pair; optional for public commands
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
    /// Host overrides; unset hosts keep their defaults
    #[serde(default)]
    pub endpoints: ApiEndpoints,
    /// Validity window attached to signed requests
    #[serde(default)]
    pub recv_window_ms: Option<u64>,
    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoints: ApiEndpoints::default(),
            recv_window_ms: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("read config file {path}"))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse YAML config")?;
        if config.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(config)
    }

    /// Credentials from the environment, falling back to the file
    pub fn resolve_credentials(&self) -> Result<Option<Credentials>> {
        self.resolve_credentials_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve_credentials`](Self::resolve_credentials) with an
    /// injectable variable lookup.
    pub fn resolve_credentials_with<F>(&self, lookup: F) -> Result<Option<Credentials>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.credentials.clone().unwrap_or_default();
        let api_key = lookup(API_KEY_ENV)
            .filter(|value| !value.is_empty())
            .or(file.api_key);
        let api_secret = lookup(API_SECRET_ENV)
            .filter(|value| !value.is_empty())
            .or(file.api_secret);

        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Ok(Some(Credentials::new(key, secret))),
            (None, None) => Ok(None),
            (Some(_), None) => bail!("API key configured without a secret ({API_SECRET_ENV})"),
            (None, Some(_)) => bail!("API secret configured without a key ({API_KEY_ENV})"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_endpoints(self.endpoints.clone())
    }

    /// Request window stamped now, with the configured receive window
    pub fn window(&self) -> RequestWindow {
        let window = RequestWindow::now();
        match self.recv_window_ms {
            Some(recv_window) => window.with_recv_window(recv_window),
            None => window,
        }
    }

    pub fn build_client(&self) -> Result<KryptonoClient> {
        let credentials = self.resolve_credentials()?;
        KryptonoClient::with_config(self.client_config(), credentials).context("build HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
credentials:
  api_key: file-key
  api_secret: file-secret
endpoints:
  general: "http://localhost:9000/k"
recv_window_ms: 5000
timeout_secs: 5
"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_yaml_str(FULL).expect("config parses");

        assert_eq!(config.endpoints.general, "http://localhost:9000/k");
        assert_eq!(config.endpoints.market, ApiEndpoints::default().market);
        assert_eq!(config.recv_window_ms, Some(5000));
        assert_eq!(config.client_config().timeout, Duration::from_secs(5));

        let credentials = config
            .resolve_credentials_with(no_env)
            .expect("resolves")
            .expect("credentials present");
        assert_eq!(credentials.api_key(), "file-key");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_yaml_str("{}").expect("config parses");

        assert_eq!(config.endpoints, ApiEndpoints::default());
        assert_eq!(config.timeout_secs, 30);
        assert!(config.resolve_credentials_with(no_env).expect("resolves").is_none());
        assert!(config.window().recv_window.is_none());
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = CliConfig::from_yaml_str(FULL).expect("config parses");
        let credentials = config
            .resolve_credentials_with(|name| match name {
                API_KEY_ENV => Some("env-key".to_string()),
                _ => None,
            })
            .expect("resolves")
            .expect("credentials present");

        assert_eq!(credentials.api_key(), "env-key");
    }

    #[test]
    fn test_key_without_secret_is_rejected() {
        let config = CliConfig::from_yaml_str("credentials:\n  api_key: lonely\n").expect("parses");
        assert!(config.resolve_credentials_with(no_env).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(CliConfig::from_yaml_str("timeout_secs: 0").is_err());
    }

    #[test]
    fn test_window_carries_recv_window() {
        let config = CliConfig::from_yaml_str("recv_window_ms: 7000").expect("parses");
        assert_eq!(config.window().recv_window, Some(7000));
    }

    #[test]
    fn test_sample_config_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/examples/kryptono.yaml");
        let config = CliConfig::from_file(path).expect("sample config parses");
        assert_eq!(config.endpoints, ApiEndpoints::default());
    }
}
