use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub trading_url: Option<String>,
    pub public_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 4)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("trading_url", &self.trading_url)?;
        state.serialize_field("public_url", &self.public_url)?;
        state.end()
    }
}

// Custom Deserialize implementation
impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key: String,
            secret_key: String,
            trading_url: Option<String>,
            public_url: Option<String>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            secret_key: Secret::new(helper.secret_key),
            trading_url: helper.trading_url,
            public_url: helper.public_url,
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            trading_url: None,
            public_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{EXCHANGE}_API_KEY` (e.g., `POLONIEX_API_KEY`)
    /// - `{EXCHANGE}_SECRET_KEY` (e.g., `POLONIEX_SECRET_KEY`)
    /// - `{EXCHANGE}_TRADING_URL` (optional)
    /// - `{EXCHANGE}_PUBLIC_URL` (optional)
    pub fn from_env(exchange_prefix: &str) -> Result<Self, ConfigError> {
        let api_key_var = format!("{}_API_KEY", exchange_prefix.to_uppercase());
        let secret_key_var = format!("{}_SECRET_KEY", exchange_prefix.to_uppercase());
        let trading_url_var = format!("{}_TRADING_URL", exchange_prefix.to_uppercase());
        let public_url_var = format!("{}_PUBLIC_URL", exchange_prefix.to_uppercase());

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let trading_url = env::var(&trading_url_var).ok();
        let public_url = env::var(&public_url_var).ok();

        Ok(Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            trading_url,
            public_url,
        })
    }

    /// Create configuration from .env file and environment variables
    ///
    /// This method first loads environment variables from a .env file (if it exists),
    /// then reads the configuration using the standard environment variable names.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    /// Add .env to your .gitignore file.
    #[cfg(feature = "env-file")]
    pub fn from_env_file(exchange_prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(exchange_prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(
        exchange_prefix: &str,
        env_file_path: &str,
    ) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(_) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(exchange_prefix)
    }

    /// Create configuration for read-only operations (market data only)
    /// This doesn't require API credentials for public endpoints
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            api_key: Secret::new(String::new()),
            secret_key: Secret::new(String::new()),
            trading_url: None,
            public_url: None,
        }
    }

    /// Check if this configuration has valid credentials for authenticated operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Set a custom trading API URL
    #[must_use]
    pub fn trading_url(mut self, url: String) -> Self {
        self.trading_url = Some(url);
        self
    }

    /// Set a custom public API URL
    #[must_use]
    pub fn public_url(mut self, url: String) -> Self {
        self.public_url = Some(url);
        self
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_redacts_secrets() {
        let config = ExchangeConfig::new("my_key".to_string(), "my_secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("my_key"));
        assert!(!json.contains("my_secret"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn read_only_has_no_credentials() {
        assert!(!ExchangeConfig::read_only().has_credentials());
        assert!(ExchangeConfig::new("k".into(), "s".into()).has_credentials());
    }

    #[test]
    fn url_overrides() {
        let config = ExchangeConfig::read_only()
            .trading_url("https://example.com/tradingApi".to_string())
            .public_url("https://example.com/public".to_string());
        assert_eq!(
            config.trading_url.as_deref(),
            Some("https://example.com/tradingApi")
        );
        assert_eq!(
            config.public_url.as_deref(),
            Some("https://example.com/public")
        );
    }
}
