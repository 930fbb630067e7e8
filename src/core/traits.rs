use crate::core::{
    errors::ExchangeError,
    types::{
        CancelAck, DateInput, OpenOrder, OrderAck, OrderBook, OrderType, PrivateTrade,
        PublicTrade, Ticker, WithdrawAck,
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;

#[async_trait]
pub trait MarketDataSource {
    /// All tickers, keyed by uppercase pair
    async fn get_tickers(&self) -> Result<HashMap<String, Ticker>, ExchangeError>;

    /// Ticker for a single pair, if listed
    async fn get_ticker(&self, pair: &str) -> Result<Option<Ticker>, ExchangeError>;

    /// The set of listed pairs, derived from the ticker mapping
    async fn get_trading_pairs(&self) -> Result<Vec<String>, ExchangeError>;

    /// 24-hour volume mapping; per-pair entries plus the exchange totals
    async fn get_volume(&self) -> Result<HashMap<String, Value>, ExchangeError>;

    /// 24-hour volume for a single pair, if listed
    async fn get_volume_for(
        &self,
        pair: &str,
    ) -> Result<Option<HashMap<String, Decimal>>, ExchangeError>;

    /// Order book for a pair, limited to `depth` levels per side
    async fn get_order_book(&self, pair: &str, depth: u32) -> Result<OrderBook, ExchangeError>;

    /// Public market trade history, optionally bounded by dates
    async fn get_trade_history(
        &self,
        pair: &str,
        start: Option<DateInput>,
        end: Option<DateInput>,
        period: Option<u32>,
    ) -> Result<Vec<PublicTrade>, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    /// Account balances, keyed by uppercase currency code
    async fn get_balances(&self) -> Result<HashMap<String, f64>, ExchangeError>;

    /// Balance for a single currency, if present
    async fn get_balance_for(&self, currency: &str) -> Result<Option<f64>, ExchangeError>;

    /// Open orders on a pair
    async fn get_open_orders(&self, pair: &str) -> Result<Vec<OpenOrder>, ExchangeError>;

    /// The account's trade history on a pair
    async fn get_my_trade_history(&self, pair: &str) -> Result<Vec<PrivateTrade>, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer {
    /// Place a buy order
    async fn buy(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError>;

    /// Place a sell order
    async fn sell(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError>;

    /// Cancel an open order by its number
    async fn cancel_order(&self, pair: &str, order_number: u64)
        -> Result<CancelAck, ExchangeError>;
}

#[async_trait]
pub trait Withdrawals {
    /// Withdraw an amount of a currency to an address
    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawAck, ExchangeError>;
}

// Composite trait for when the whole capability set is needed at once
#[async_trait]
pub trait ExchangeConnector: MarketDataSource + AccountInfo + OrderPlacer + Withdrawals {}
