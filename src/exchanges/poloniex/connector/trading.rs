use crate::core::{
    errors::ExchangeError,
    kernel::RestClient,
    traits::{OrderPlacer, Withdrawals},
    types::{CancelAck, OrderAck, OrderSide, OrderType, WithdrawAck},
};
use crate::exchanges::poloniex::{
    conversions::{convert_cancel_ack, convert_order_ack, convert_withdraw_ack},
    params::{normalize_currency, normalize_pair},
    rest::PoloniexRestClient,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::instrument;

/// Trading implementation for Poloniex
pub struct Trading<R: RestClient> {
    rest: PoloniexRestClient<R>,
}

impl<R: RestClient> Trading<R> {
    pub fn new(rest: &R) -> Self
    where
        R: Clone,
    {
        Self {
            rest: PoloniexRestClient::new(rest.clone()),
        }
    }

    async fn buy_or_sell(
        &self,
        side: OrderSide,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError> {
        let pair = normalize_pair(pair);
        let raw = self
            .rest
            .place_order(side, &pair, rate, amount, order_type)
            .await?;
        Ok(convert_order_ack(&raw))
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair, rate = %rate, amount = %amount))]
    async fn buy(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError> {
        self.buy_or_sell(OrderSide::Buy, pair, rate, amount, order_type)
            .await
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair, rate = %rate, amount = %amount))]
    async fn sell(
        &self,
        pair: &str,
        rate: Decimal,
        amount: Decimal,
        order_type: Option<OrderType>,
    ) -> Result<OrderAck, ExchangeError> {
        self.buy_or_sell(OrderSide::Sell, pair, rate, amount, order_type)
            .await
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair, order_number = order_number))]
    async fn cancel_order(
        &self,
        pair: &str,
        order_number: u64,
    ) -> Result<CancelAck, ExchangeError> {
        let pair = normalize_pair(pair);
        let raw = self.rest.cancel_order(&pair, order_number).await?;
        Ok(convert_cancel_ack(&raw))
    }
}

#[async_trait]
impl<R: RestClient> Withdrawals for Trading<R> {
    #[instrument(skip(self, address), fields(exchange = "poloniex", currency = %currency, amount = %amount))]
    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawAck, ExchangeError> {
        let currency = normalize_currency(currency);
        let raw = self.rest.withdraw(&currency, amount, address).await?;
        Ok(convert_withdraw_ack(raw))
    }
}
