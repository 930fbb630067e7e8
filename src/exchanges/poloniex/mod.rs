pub mod connector;
pub mod conversions;
pub mod params;
pub mod rest;
pub mod types;

use crate::core::config::{ConfigError, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{
    HmacSha512Signer, ReqwestRest, RestClientBuilder, RestClientConfig,
};
use std::sync::Arc;

// Re-export main types for easier importing
pub use connector::{Account, MarketData, PoloniexConnector, Trading};
pub use types::{
    PoloniexCancelAck, PoloniexOpenOrder, PoloniexOrderAck, PoloniexOrderBook,
    PoloniexPrivateTrade, PoloniexPublicTrade, PoloniexTicker, PoloniexWithdrawAck,
};

/// Production public API base URL
pub const PUBLIC_URL: &str = "https://poloniex.com/public";
/// Production trading API base URL
pub const TRADING_URL: &str = "https://poloniex.com/tradingApi";

/// REST configuration for the given exchange config, applying URL overrides
#[must_use]
pub fn rest_client_config(config: &ExchangeConfig) -> RestClientConfig {
    RestClientConfig::new(
        config
            .public_url
            .clone()
            .unwrap_or_else(|| PUBLIC_URL.to_string()),
        config
            .trading_url
            .clone()
            .unwrap_or_else(|| TRADING_URL.to_string()),
        "poloniex".to_string(),
    )
}

/// Create a connector with full trading access.
///
/// Fails fast when credentials are missing; no network call is made.
pub fn build_connector(
    config: ExchangeConfig,
) -> Result<PoloniexConnector<ReqwestRest>, ExchangeError> {
    build_connector_with_rest_config(&config, rest_client_config(&config))
}

/// Create a connector with full trading access and a custom REST configuration
pub fn build_connector_with_rest_config(
    config: &ExchangeConfig,
    rest_config: RestClientConfig,
) -> Result<PoloniexConnector<ReqwestRest>, ExchangeError> {
    if !config.has_credentials() {
        return Err(ExchangeError::Config(ConfigError::MissingCredentials(
            "trading access requires an API key and secret".to_string(),
        )));
    }

    let signer = Arc::new(HmacSha512Signer::new(
        config.api_key().to_string(),
        config.secret_key().to_string(),
    ));

    let rest = RestClientBuilder::new(rest_config)
        .with_signer(signer)
        .build()?;

    Ok(PoloniexConnector::new(rest))
}

/// Create a connector for public market data only.
///
/// No credentials are needed; trading commands return an authentication
/// error without touching the network.
pub fn build_public_connector(
    config: ExchangeConfig,
) -> Result<PoloniexConnector<ReqwestRest>, ExchangeError> {
    let rest = RestClientBuilder::new(rest_client_config(&config)).build()?;
    Ok(PoloniexConnector::new(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_are_production() {
        let config = rest_client_config(&ExchangeConfig::read_only());
        assert_eq!(config.public_url, PUBLIC_URL);
        assert_eq!(config.trading_url, TRADING_URL);
        assert!(config.verify_tls);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn url_overrides_are_applied() {
        let exchange_config = ExchangeConfig::read_only()
            .public_url("http://127.0.0.1:9/public".to_string())
            .trading_url("http://127.0.0.1:9/tradingApi".to_string());
        let config = rest_client_config(&exchange_config);
        assert_eq!(config.public_url, "http://127.0.0.1:9/public");
        assert_eq!(config.trading_url, "http://127.0.0.1:9/tradingApi");
    }

    #[test]
    fn trading_connector_requires_credentials() {
        let result = build_connector(ExchangeConfig::read_only());
        assert!(matches!(
            result,
            Err(ExchangeError::Config(ConfigError::MissingCredentials(_)))
        ));
    }

    #[test]
    fn public_connector_needs_no_credentials() {
        assert!(build_public_connector(ExchangeConfig::read_only()).is_ok());
    }
}
