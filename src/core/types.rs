use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side of an order as reported by the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Optional execution constraint for a new order.
///
/// Exactly one of the exchange's three flag fields is set when a constraint
/// is supplied; a plain limit order sends none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    FillOrKill,
    ImmediateOrCancel,
    PostOnly,
}

impl OrderType {
    /// Field name carrying the `1` flag for this constraint.
    #[must_use]
    pub fn param_key(self) -> &'static str {
        match self {
            Self::FillOrKill => "fillOrKill",
            Self::ImmediateOrCancel => "immediateOrCancel",
            Self::PostOnly => "postOnly",
        }
    }
}

impl FromStr for OrderType {
    type Err = crate::core::errors::ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fillOrKill" => Ok(Self::FillOrKill),
            "immediateOrCancel" => Ok(Self::ImmediateOrCancel),
            "postOnly" => Ok(Self::PostOnly),
            other => Err(crate::core::errors::ExchangeError::InvalidParameters(
                format!("unrecognized order type: {other}"),
            )),
        }
    }
}

/// Flexible `start`/`end` input for date-bounded queries.
///
/// Accepts an epoch-seconds integer, a parsed timestamp, or a free-form
/// date string resolved best-effort at request time.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Epoch(i64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl From<i64> for DateInput {
    fn from(epoch: i64) -> Self {
        Self::Epoch(epoch)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// 24-hour ticker entry, keyed by pair in the ticker mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub last: Decimal,
    pub lowest_ask: Decimal,
    pub highest_bid: Decimal,
    pub percent_change: Decimal,
    pub base_volume: Decimal,
    pub quote_volume: Decimal,
    pub is_frozen: bool,
    pub high_24hr: Decimal,
    pub low_24hr: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderBookEntry {
    pub price: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
    pub is_frozen: bool,
    pub seq: u64,
}

/// Trade from the public market history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicTrade {
    pub global_trade_id: u64,
    pub trade_id: u64,
    pub date: String,
    pub side: OrderSide,
    pub rate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
}

/// Trade from the authenticated account history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateTrade {
    pub global_trade_id: u64,
    pub trade_id: String,
    pub date: String,
    pub side: OrderSide,
    pub rate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    pub fee: Decimal,
    pub order_number: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenOrder {
    pub order_number: String,
    pub side: OrderSide,
    pub rate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
}

/// Fill reported inline with an order placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultingTrade {
    pub trade_id: String,
    pub date: String,
    pub side: OrderSide,
    pub rate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
}

/// Acknowledgement of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAck {
    pub order_number: String,
    pub resulting_trades: Vec<ResultingTrade>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAck {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawAck {
    pub response: String,
}

/// Fallback-based parsing helpers for the exchange's string-encoded numbers.
pub mod conversion {
    use rust_decimal::Decimal;
    use serde_json::Value;

    /// Convert string to Decimal with fallback
    #[inline]
    pub fn string_to_decimal(s: &str) -> Decimal {
        s.parse().unwrap_or_else(|_| Decimal::from(0))
    }

    /// Convert a JSON value (string or number) to Decimal with fallback
    #[inline]
    pub fn value_to_decimal(v: &Value) -> Decimal {
        match v {
            Value::String(s) => string_to_decimal(s),
            Value::Number(n) => string_to_decimal(&n.to_string()),
            _ => Decimal::from(0),
        }
    }

    /// Convert string to f64 with fallback
    #[inline]
    pub fn string_to_f64(s: &str) -> f64 {
        s.parse().unwrap_or(0.0)
    }

    /// The exchange encodes booleans as `"0"` / `"1"` strings
    #[inline]
    pub fn string_to_flag(s: &str) -> bool {
        s.trim() == "1"
    }

    /// Convert a side string to `OrderSide`, tolerating unknown values
    #[inline]
    pub fn string_to_side(s: &str) -> super::OrderSide {
        if s.eq_ignore_ascii_case("sell") {
            super::OrderSide::Sell
        } else {
            super::OrderSide::Buy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_parses_known_values() {
        assert_eq!(
            OrderType::from_str("fillOrKill").unwrap(),
            OrderType::FillOrKill
        );
        assert_eq!(
            OrderType::from_str("immediateOrCancel").unwrap(),
            OrderType::ImmediateOrCancel
        );
        assert_eq!(OrderType::from_str("postOnly").unwrap(), OrderType::PostOnly);
    }

    #[test]
    fn order_type_rejects_unknown_values() {
        let err = OrderType::from_str("goodTillCancelled").unwrap_err();
        assert!(matches!(
            err,
            crate::core::errors::ExchangeError::InvalidParameters(_)
        ));
    }

    #[test]
    fn conversion_fallbacks() {
        assert_eq!(conversion::string_to_decimal("not-a-number"), Decimal::ZERO);
        assert_eq!(conversion::string_to_f64("0.25"), 0.25);
        assert!(conversion::string_to_flag("1"));
        assert!(!conversion::string_to_flag("0"));
        assert_eq!(conversion::string_to_side("sell"), OrderSide::Sell);
        assert_eq!(conversion::string_to_side("buy"), OrderSide::Buy);
    }

    #[test]
    fn value_to_decimal_handles_both_encodings() {
        let from_string = conversion::value_to_decimal(&serde_json::json!("0.025"));
        let from_number = conversion::value_to_decimal(&serde_json::json!(100.5));
        assert_eq!(from_string.to_string(), "0.025");
        assert_eq!(from_number.to_string(), "100.5");
    }
}
