use crate::core::errors::ExchangeError;
use crate::core::kernel::{ParamSet, RestClient};
use crate::core::types::{OrderSide, OrderType};
use crate::exchanges::poloniex::types::{
    PoloniexCancelAck, PoloniexOpenOrder, PoloniexOrderAck, PoloniexOrderBook,
    PoloniexPrivateTrade, PoloniexPublicTrade, PoloniexTicker, PoloniexWithdrawAck,
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;

/// Thin typed wrapper around `RestClient` for the Poloniex command set
///
/// Each method maps one command to its parameter shape. Inputs are expected
/// to be normalized already (uppercase pairs, resolved epochs); this layer
/// adds nothing but the mapping.
pub struct PoloniexRestClient<R: RestClient> {
    client: R,
}

impl<R: RestClient> PoloniexRestClient<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// All tickers, keyed by pair
    pub async fn return_ticker(&self) -> Result<HashMap<String, PoloniexTicker>, ExchangeError> {
        self.client
            .public_get_json(&ParamSet::command("returnTicker"))
            .await
    }

    /// 24-hour volume; per-pair objects plus top-level exchange totals
    pub async fn return_24h_volume(&self) -> Result<HashMap<String, Value>, ExchangeError> {
        self.client
            .public_get_json(&ParamSet::command("return24hVolume"))
            .await
    }

    /// Order book for a pair
    pub async fn return_order_book(
        &self,
        pair: &str,
        depth: u32,
    ) -> Result<PoloniexOrderBook, ExchangeError> {
        let mut params = ParamSet::command("returnOrderBook");
        params.insert("currencyPair", pair);
        params.insert("depth", depth);
        self.client.public_get_json(&params).await
    }

    /// Public market trade history, optionally bounded
    pub async fn return_trade_history(
        &self,
        pair: &str,
        start: Option<i64>,
        end: Option<i64>,
        period: Option<u32>,
    ) -> Result<Vec<PoloniexPublicTrade>, ExchangeError> {
        let mut params = ParamSet::command("returnTradeHistory");
        params.insert("currencyPair", pair);
        params.insert_opt("period", period);
        params.insert_opt("start", start);
        params.insert_opt("end", end);
        self.client.public_get_json(&params).await
    }

    /// Account balances, keyed by currency; amounts arrive as strings
    pub async fn return_balances(&self) -> Result<HashMap<String, String>, ExchangeError> {
        self.client
            .trading_post_json(&ParamSet::command("returnBalances"))
            .await
    }

    /// Open orders on a pair
    pub async fn return_open_orders(
        &self,
        pair: &str,
    ) -> Result<Vec<PoloniexOpenOrder>, ExchangeError> {
        let mut params = ParamSet::command("returnOpenOrders");
        params.insert("currencyPair", pair);
        self.client.trading_post_json(&params).await
    }

    /// The account's trade history on a pair
    pub async fn return_my_trade_history(
        &self,
        pair: &str,
    ) -> Result<Vec<PoloniexPrivateTrade>, ExchangeError> {
        let mut params = ParamSet::command("returnTradeHistory");
        params.insert("currencyPair", pair);
        self.client.trading_post_json(&params).await
    }

    /// Place a `buy` or `sell` order
    pub async fn place_order(
        &self,
        side: OrderSide,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<PoloniexOrderAck, ExchangeError> {
        let params = order_params(side, pair, rate, amount, order_type);
        self.client.trading_post_json(&params).await
    }

    /// Cancel an order by number
    pub async fn cancel_order(
        &self,
        pair: &str,
        order_number: u64,
    ) -> Result<PoloniexCancelAck, ExchangeError> {
        let mut params = ParamSet::command("cancelOrder");
        params.insert("currencyPair", pair);
        params.insert("orderNumber", order_number);
        self.client.trading_post_json(&params).await
    }

    /// Withdraw an amount of a currency to an address
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<PoloniexWithdrawAck, ExchangeError> {
        let mut params = ParamSet::command("withdraw");
        params.insert("currency", currency);
        params.insert("amount", amount);
        params.insert("address", address);
        self.client.trading_post_json(&params).await
    }
}

/// Parameter shape for `buy`/`sell`: at most one constraint flag is set
pub(crate) fn order_params(
    side: OrderSide,
    pair: &str,
    rate: Decimal,
    amount: Decimal,
    order_type: Option<OrderType>,
) -> ParamSet {
    let mut params = ParamSet::command(&side.to_string());
    params.insert("currencyPair", pair);
    params.insert("rate", rate);
    params.insert("amount", amount);
    if let Some(order_type) = order_type {
        params.insert(order_type.param_key(), 1);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_with_post_only_sets_exactly_one_flag() {
        let params = order_params(
            OrderSide::Buy,
            "BTC_USD",
            Decimal::from(100),
            Decimal::from(1),
            Some(OrderType::PostOnly),
        );
        assert_eq!(params.get("command"), Some("buy"));
        assert_eq!(params.get("postOnly"), Some("1"));
        assert_eq!(params.get("fillOrKill"), None);
        assert_eq!(params.get("immediateOrCancel"), None);
    }

    #[test]
    fn plain_order_sets_no_flag() {
        let params = order_params(
            OrderSide::Sell,
            "BTC_USD",
            Decimal::from(100),
            Decimal::from(1),
            None,
        );
        assert_eq!(params.get("command"), Some("sell"));
        assert_eq!(params.get("fillOrKill"), None);
        assert_eq!(params.get("immediateOrCancel"), None);
        assert_eq!(params.get("postOnly"), None);
    }

    #[test]
    fn order_body_matches_wire_shape() {
        let params = order_params(
            OrderSide::Buy,
            "BTC_USD",
            Decimal::new(1, 2),
            Decimal::from(10),
            Some(OrderType::FillOrKill),
        );
        assert_eq!(
            params.encode().unwrap(),
            "command=buy&currencyPair=BTC_USD&rate=0.01&amount=10&fillOrKill=1"
        );
    }
}
