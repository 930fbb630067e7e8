use serde::Deserialize;
use serde_json::Value;

/// Ticker entry as returned by `returnTicker`; all numbers arrive as strings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoloniexTicker {
    #[serde(default)]
    pub id: Option<i64>,
    pub last: String,
    pub lowest_ask: String,
    pub highest_bid: String,
    pub percent_change: String,
    pub base_volume: String,
    pub quote_volume: String,
    pub is_frozen: String,
    pub high24hr: String,
    pub low24hr: String,
}

/// Order book as returned by `returnOrderBook`.
///
/// Levels arrive as two-element arrays mixing encodings: price is a string,
/// amount a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoloniexOrderBook {
    pub asks: Vec<Vec<Value>>,
    pub bids: Vec<Vec<Value>>,
    pub is_frozen: String,
    pub seq: u64,
}

/// Market trade entry from the public `returnTradeHistory`
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexPublicTrade {
    #[serde(rename = "globalTradeID")]
    pub global_trade_id: u64,
    #[serde(rename = "tradeID")]
    pub trade_id: u64,
    pub date: String,
    #[serde(rename = "type")]
    pub side: String,
    pub rate: String,
    pub amount: String,
    pub total: String,
}

/// Account trade entry from the authenticated `returnTradeHistory`
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexPrivateTrade {
    #[serde(rename = "globalTradeID")]
    pub global_trade_id: u64,
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub side: String,
    pub rate: String,
    pub amount: String,
    pub total: String,
    pub fee: String,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    pub category: String,
}

/// Open order entry from `returnOpenOrders`
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexOpenOrder {
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    #[serde(rename = "type")]
    pub side: String,
    pub rate: String,
    pub amount: String,
    pub total: String,
}

/// Fill reported inline with a `buy`/`sell` acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexResultingTrade {
    #[serde(rename = "tradeID")]
    pub trade_id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub side: String,
    pub rate: String,
    pub amount: String,
    pub total: String,
}

/// Acknowledgement of `buy`/`sell`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoloniexOrderAck {
    pub order_number: String,
    #[serde(default)]
    pub resulting_trades: Vec<PoloniexResultingTrade>,
}

/// Acknowledgement of `cancelOrder`
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexCancelAck {
    pub success: u8,
}

/// Acknowledgement of `withdraw`
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexWithdrawAck {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_decodes_from_wire_shape() {
        let raw = r#"{
            "id": 121,
            "last": "0.0251",
            "lowestAsk": "0.02589999",
            "highestBid": "0.0251",
            "percentChange": "0.02390438",
            "baseVolume": "6.16485315",
            "quoteVolume": "245.82513926",
            "isFrozen": "0",
            "high24hr": "0.03767110",
            "low24hr": "0.02400000"
        }"#;
        let ticker: PoloniexTicker = serde_json::from_str(raw).unwrap();
        assert_eq!(ticker.last, "0.0251");
        assert_eq!(ticker.is_frozen, "0");
        assert_eq!(ticker.high24hr, "0.03767110");
    }

    #[test]
    fn order_book_decodes_mixed_level_encodings() {
        let raw = r#"{
            "asks": [["0.032755", 320.03], ["0.032766", 10]],
            "bids": [["0.032083", 3.8]],
            "isFrozen": "0",
            "seq": 595100708
        }"#;
        let book: PoloniexOrderBook = serde_json::from_str(raw).unwrap();
        assert_eq!(book.asks.len(), 2);
        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.seq, 595_100_708);
    }

    #[test]
    fn order_ack_decodes_resulting_trades() {
        let raw = r#"{
            "orderNumber": "31226040",
            "resultingTrades": [{
                "amount": "338.8732",
                "date": "2016-05-10 21:13:41",
                "rate": "0.00000173",
                "total": "0.00058625",
                "tradeID": "16164",
                "type": "buy"
            }]
        }"#;
        let ack: PoloniexOrderAck = serde_json::from_str(raw).unwrap();
        assert_eq!(ack.order_number, "31226040");
        assert_eq!(ack.resulting_trades.len(), 1);
        assert_eq!(ack.resulting_trades[0].side, "buy");
    }

    #[test]
    fn private_trade_decodes() {
        let raw = r#"{
            "globalTradeID": 25129732,
            "tradeID": "6325758",
            "date": "2016-04-05 08:08:40",
            "rate": "0.02565498",
            "amount": "0.10000000",
            "total": "0.00256549",
            "fee": "0.00200000",
            "orderNumber": "34225313575",
            "type": "sell",
            "category": "exchange"
        }"#;
        let trade: PoloniexPrivateTrade = serde_json::from_str(raw).unwrap();
        assert_eq!(trade.order_number, "34225313575");
        assert_eq!(trade.category, "exchange");
    }
}
