use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{
    AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer, Withdrawals,
};
use crate::core::types::{
    CancelAck, DateInput, OpenOrder, OrderAck, OrderBook, OrderType, PrivateTrade, PublicTrade,
    Ticker, WithdrawAck,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// Poloniex connector that composes all sub-trait implementations
pub struct PoloniexConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub account: Account<R>,
    pub trading: Trading<R>,
}

impl<R: RestClient + Clone> PoloniexConnector<R> {
    /// Compose a connector around an existing transport
    pub fn new(rest: R) -> Self {
        Self {
            market: MarketData::new(&rest),
            account: Account::new(&rest),
            trading: Trading::new(&rest),
        }
    }
}

impl<R: RestClient> ExchangeConnector for PoloniexConnector<R> {}

// Delegate each capability to its sub-component

#[async_trait]
impl<R: RestClient> MarketDataSource for PoloniexConnector<R> {
    async fn get_tickers(&self) -> Result<HashMap<String, Ticker>, ExchangeError> {
        self.market.get_tickers().await
    }

    async fn get_ticker(&self, pair: &str) -> Result<Option<Ticker>, ExchangeError> {
        self.market.get_ticker(pair).await
    }

    async fn get_trading_pairs(&self) -> Result<Vec<String>, ExchangeError> {
        self.market.get_trading_pairs().await
    }

    async fn get_volume(&self) -> Result<HashMap<String, Value>, ExchangeError> {
        self.market.get_volume().await
    }

    async fn get_volume_for(
        &self,
        pair: &str,
    ) -> Result<Option<HashMap<String, Decimal>>, ExchangeError> {
        self.market.get_volume_for(pair).await
    }

    async fn get_order_book(&self, pair: &str, depth: u32) -> Result<OrderBook, ExchangeError> {
        self.market.get_order_book(pair, depth).await
    }

    async fn get_trade_history(
        &self,
        pair: &str,
        start: Option<DateInput>,
        end: Option<DateInput>,
        period: Option<u32>,
    ) -> Result<Vec<PublicTrade>, ExchangeError> {
        self.market.get_trade_history(pair, start, end, period).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for PoloniexConnector<R> {
    async fn get_balances(&self) -> Result<HashMap<String, f64>, ExchangeError> {
        self.account.get_balances().await
    }

    async fn get_balance_for(&self, currency: &str) -> Result<Option<f64>, ExchangeError> {
        self.account.get_balance_for(currency).await
    }

    async fn get_open_orders(&self, pair: &str) -> Result<Vec<OpenOrder>, ExchangeError> {
        self.account.get_open_orders(pair).await
    }

    async fn get_my_trade_history(&self, pair: &str) -> Result<Vec<PrivateTrade>, ExchangeError> {
        self.account.get_my_trade_history(pair).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for PoloniexConnector<R> {
    async fn buy(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError> {
        self.trading.buy(pair, rate, amount, order_type).await
    }

    async fn sell(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError> {
        self.trading.sell(pair, rate, amount, order_type).await
    }

    async fn cancel_order(
        &self,
        pair: &str,
        order_number: u64,
    ) -> Result<CancelAck, ExchangeError> {
        self.trading.cancel_order(pair, order_number).await
    }
}

#[async_trait]
impl<R: RestClient> Withdrawals for PoloniexConnector<R> {
    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawAck, ExchangeError> {
        self.trading.withdraw(currency, amount, address).await
    }
}
