use crate::core::errors::ExchangeError;
use crate::core::kernel::params::ParamSet;
use crate::core::kernel::signer::{NonceSource, Signer};
use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, trace};

/// REST client trait for the exchange's two HTTP surfaces
///
/// Public commands are unauthenticated GETs against the public base URL;
/// trading commands are nonce-signed POSTs against the trading base URL.
/// The `Value` methods are the pass-through surface: whatever JSON the
/// exchange returns, including its application-level error objects, reaches
/// the caller undisturbed. The typed variants decode a known success shape.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Issue an unauthenticated GET with the given parameters
    async fn public_get(&self, params: &ParamSet) -> Result<Value, ExchangeError>;

    /// Issue an unauthenticated GET and decode a typed response
    async fn public_get_json<T: DeserializeOwned>(
        &self,
        params: &ParamSet,
    ) -> Result<T, ExchangeError>;

    /// Issue a signed POST with the given parameters
    async fn trading_post(&self, params: &ParamSet) -> Result<Value, ExchangeError>;

    /// Issue a signed POST and decode a typed response
    async fn trading_post_json<T: DeserializeOwned>(
        &self,
        params: &ParamSet,
    ) -> Result<T, ExchangeError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for public (unauthenticated) commands
    pub public_url: String,
    /// Base URL for trading (signed) commands
    pub trading_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds, applied to both surfaces
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
    /// Whether to verify TLS certificates. On unless explicitly disabled.
    pub verify_tls: bool,
}

impl RestClientConfig {
    /// Create a new configuration
    pub fn new(public_url: String, trading_url: String, exchange_name: String) -> Self {
        Self {
            public_url,
            trading_url,
            exchange_name,
            timeout_seconds: 10,
            user_agent: "poloniex-client/0.1".to_string(),
            verify_tls: true,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Only for debugging against intercepting proxies; never in production.
    pub fn danger_disable_tls_verification(mut self) -> Self {
        self.verify_tls = false;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .danger_accept_invalid_certs(!self.config.verify_tls)
            .build()
            .map_err(|e| {
                ExchangeError::Config(crate::core::config::ConfigError::InvalidConfiguration(
                    format!("failed to build HTTP client: {e}"),
                ))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
            nonce: Arc::new(tokio::sync::Mutex::new(NonceSource::new())),
        })
    }
}

/// Implementation of `RestClient` using reqwest
///
/// Clones share one connection pool and one nonce source, so every clone
/// belongs to the same credential set. Authenticated dispatch holds the
/// nonce lock from assignment through response completion: the exchange
/// rejects non-increasing nonces per key, and concurrent in-flight signed
/// requests could otherwise arrive out of order. Public dispatch takes no
/// lock and runs fully in parallel.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    nonce: Arc<tokio::sync::Mutex<NonceSource>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Read the response body and surface HTTP-level failures
    async fn read_body(&self, response: Response) -> Result<String, ExchangeError> {
        let status = response.status();
        let body = response.text().await.map_err(ExchangeError::Transport)?;

        trace!(exchange = %self.config.exchange_name, %status, "response body: {}", body);

        if status.is_success() {
            Ok(body)
        } else {
            Err(ExchangeError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn public_get_text(&self, params: &ParamSet) -> Result<String, ExchangeError> {
        let query = params.encode()?;
        let url = if query.is_empty() {
            self.config.public_url.clone()
        } else {
            format!("{}?{}", self.config.public_url, query)
        };

        let response = self.client.get(&url).send().await?;
        self.read_body(response).await
    }

    async fn trading_post_text(&self, params: &ParamSet) -> Result<String, ExchangeError> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            ExchangeError::Auth("trading command requires API credentials".to_string())
        })?;

        // The lock spans nonce assignment through response completion so
        // that signed requests reach the exchange in nonce order.
        let mut nonce = self.nonce.lock().await;

        // Nonce joins the entry list after filtering; it is never empty and
        // is recomputed fresh on every call.
        let mut entries = params.filtered();
        entries.push(("nonce".to_string(), nonce.next()?.to_string()));

        let body = ParamSet::encode_entries(&entries)?;
        let sign = signer.sign(body.as_bytes())?;

        let response = self
            .client
            .post(&self.config.trading_url)
            .header("Key", signer.api_key())
            .header("Sign", sign)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?;

        self.read_body(response).await
    }
}

/// Decode a response body, keeping the raw text when it is not valid JSON
pub(crate) fn decode_json<T: DeserializeOwned>(body: String) -> Result<T, ExchangeError> {
    serde_json::from_str(&body).map_err(|e| ExchangeError::decode(e, body))
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, command = params.get("command").unwrap_or("")))]
    async fn public_get(&self, params: &ParamSet) -> Result<Value, ExchangeError> {
        decode_json(self.public_get_text(params).await?)
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, command = params.get("command").unwrap_or("")))]
    async fn public_get_json<T: DeserializeOwned>(
        &self,
        params: &ParamSet,
    ) -> Result<T, ExchangeError> {
        decode_json(self.public_get_text(params).await?)
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, command = params.get("command").unwrap_or("")))]
    async fn trading_post(&self, params: &ParamSet) -> Result<Value, ExchangeError> {
        decode_json(self.trading_post_text(params).await?)
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, command = params.get("command").unwrap_or("")))]
    async fn trading_post_json<T: DeserializeOwned>(
        &self,
        params: &ParamSet,
    ) -> Result<T, ExchangeError> {
        decode_json(self.trading_post_text(params).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_retains_raw_body() {
        let result: Result<Value, _> = decode_json("<html>gateway timeout</html>".to_string());
        match result {
            Err(ExchangeError::Decode { body, .. }) => {
                assert_eq!(body, "<html>gateway timeout</html>");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn application_error_payload_passes_through() {
        let value: Value = decode_json(r#"{"error":"Invalid currency pair."}"#.to_string()).unwrap();
        assert_eq!(value["error"], "Invalid currency pair.");
    }
}
