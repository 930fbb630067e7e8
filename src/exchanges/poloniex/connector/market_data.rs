use crate::core::{
    errors::ExchangeError,
    kernel::RestClient,
    traits::MarketDataSource,
    types::{conversion, DateInput, OrderBook, PublicTrade, Ticker},
};
use crate::exchanges::poloniex::{
    conversions::{convert_order_book, convert_public_trade, convert_ticker},
    params::{normalize_pair, resolve_epoch},
    rest::PoloniexRestClient,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use tracing::instrument;

/// Market data implementation for Poloniex
pub struct MarketData<R: RestClient> {
    rest: PoloniexRestClient<R>,
}

impl<R: RestClient> MarketData<R> {
    /// Create a new market data source
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
impl<R: RestClient> MarketDataSource for MarketData<R> {
    #[instrument(skip(self), fields(exchange = "poloniex"))]
    async fn get_tickers(&self) -> Result<HashMap<String, Ticker>, ExchangeError> {
        let raw = self.rest.return_ticker().await?;
        Ok(raw
            .into_iter()
            .map(|(pair, ticker)| (pair, convert_ticker(&ticker)))
            .collect())
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn get_ticker(&self, pair: &str) -> Result<Option<Ticker>, ExchangeError> {
        let pair = normalize_pair(pair);
        let mut tickers = self.get_tickers().await?;
        Ok(tickers.remove(&pair))
    }

    #[instrument(skip(self), fields(exchange = "poloniex"))]
    async fn get_trading_pairs(&self) -> Result<Vec<String>, ExchangeError> {
        let raw = self.rest.return_ticker().await?;
        let mut pairs: Vec<String> = raw.into_keys().collect();
        pairs.sort_unstable();
        Ok(pairs)
    }

    #[instrument(skip(self), fields(exchange = "poloniex"))]
    async fn get_volume(&self) -> Result<HashMap<String, Value>, ExchangeError> {
        self.rest.return_24h_volume().await
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn get_volume_for(
        &self,
        pair: &str,
    ) -> Result<Option<HashMap<String, Decimal>>, ExchangeError> {
        let pair = normalize_pair(pair);
        let volume = self.get_volume().await?;
        Ok(volume.get(&pair).and_then(Value::as_object).map(|entry| {
            entry
                .iter()
                .map(|(currency, amount)| (currency.clone(), conversion::value_to_decimal(amount)))
                .collect()
        }))
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair, depth = depth))]
    async fn get_order_book(&self, pair: &str, depth: u32) -> Result<OrderBook, ExchangeError> {
        let pair = normalize_pair(pair);
        let raw = self.rest.return_order_book(&pair, depth).await?;
        Ok(convert_order_book(&raw))
    }

    #[instrument(skip(self, start, end), fields(exchange = "poloniex", pair = %pair))]
    async fn get_trade_history(
        &self,
        pair: &str,
        start: Option<DateInput>,
        end: Option<DateInput>,
        period: Option<u32>,
    ) -> Result<Vec<PublicTrade>, ExchangeError> {
        let pair = normalize_pair(pair);
        let start = resolve_epoch(start.as_ref());
        let end = resolve_epoch(end.as_ref());
        let raw = self
            .rest
            .return_trade_history(&pair, start, end, period)
            .await?;
        Ok(raw.iter().map(convert_public_trade).collect())
    }
}
