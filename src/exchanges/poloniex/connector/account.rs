use crate::core::{
    errors::ExchangeError,
    kernel::RestClient,
    traits::AccountInfo,
    types::{conversion, OpenOrder, PrivateTrade},
};
use crate::exchanges::poloniex::{
    conversions::{convert_open_order, convert_private_trade},
    params::{normalize_currency, normalize_pair},
    rest::PoloniexRestClient,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::instrument;

/// Account implementation for Poloniex
pub struct Account<R: RestClient> {
    rest: PoloniexRestClient<R>,
}

impl<R: RestClient> Account<R> {
    /// Create a new account manager
    pub fn new(rest: &R) -> Self
    where
        R: Clone,
    {
        Self {
            rest: PoloniexRestClient::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    #[instrument(skip(self), fields(exchange = "poloniex"))]
    async fn get_balances(&self) -> Result<HashMap<String, f64>, ExchangeError> {
        let raw = self.rest.return_balances().await?;
        Ok(raw
            .into_iter()
            .map(|(currency, amount)| (currency, conversion::string_to_f64(&amount)))
            .collect())
    }

    #[instrument(skip(self), fields(exchange = "poloniex", currency = %currency))]
    async fn get_balance_for(&self, currency: &str) -> Result<Option<f64>, ExchangeError> {
        let currency = normalize_currency(currency);
        let balances = self.get_balances().await?;
        Ok(balances.get(&currency).copied())
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn get_open_orders(&self, pair: &str) -> Result<Vec<OpenOrder>, ExchangeError> {
        let pair = normalize_pair(pair);
        let raw = self.rest.return_open_orders(&pair).await?;
        Ok(raw.iter().map(convert_open_order).collect())
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn get_my_trade_history(&self, pair: &str) -> Result<Vec<PrivateTrade>, ExchangeError> {
        let pair = normalize_pair(pair);
        let raw = self.rest.return_my_trade_history(&pair).await?;
        Ok(raw.iter().map(convert_private_trade).collect())
    }
}
