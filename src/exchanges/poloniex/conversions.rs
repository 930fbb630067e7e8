use crate::core::types::conversion::{
    string_to_decimal, string_to_flag, string_to_side, value_to_decimal,
};
use crate::core::types::{
    CancelAck, OpenOrder, OrderAck, OrderBook, OrderBookEntry, PrivateTrade, PublicTrade,
    ResultingTrade, Ticker, WithdrawAck,
};
use crate::exchanges::poloniex::types::{
    PoloniexCancelAck, PoloniexOpenOrder, PoloniexOrderAck, PoloniexOrderBook,
    PoloniexPrivateTrade, PoloniexPublicTrade, PoloniexResultingTrade, PoloniexTicker,
    PoloniexWithdrawAck,
};
use serde_json::Value;

pub fn convert_ticker(raw: &PoloniexTicker) -> Ticker {
    Ticker {
        last: string_to_decimal(&raw.last),
        lowest_ask: string_to_decimal(&raw.lowest_ask),
        highest_bid: string_to_decimal(&raw.highest_bid),
        percent_change: string_to_decimal(&raw.percent_change),
        base_volume: string_to_decimal(&raw.base_volume),
        quote_volume: string_to_decimal(&raw.quote_volume),
        is_frozen: string_to_flag(&raw.is_frozen),
        high_24hr: string_to_decimal(&raw.high24hr),
        low_24hr: string_to_decimal(&raw.low24hr),
    }
}

fn convert_level(level: &[Value]) -> OrderBookEntry {
    OrderBookEntry {
        price: level.first().map(value_to_decimal).unwrap_or_default(),
        amount: level.get(1).map(value_to_decimal).unwrap_or_default(),
    }
}

pub fn convert_order_book(raw: &PoloniexOrderBook) -> OrderBook {
    OrderBook {
        bids: raw.bids.iter().map(|l| convert_level(l)).collect(),
        asks: raw.asks.iter().map(|l| convert_level(l)).collect(),
        is_frozen: string_to_flag(&raw.is_frozen),
        seq: raw.seq,
    }
}

pub fn convert_public_trade(raw: &PoloniexPublicTrade) -> PublicTrade {
    PublicTrade {
        global_trade_id: raw.global_trade_id,
        trade_id: raw.trade_id,
        date: raw.date.clone(),
        side: string_to_side(&raw.side),
        rate: string_to_decimal(&raw.rate),
        amount: string_to_decimal(&raw.amount),
        total: string_to_decimal(&raw.total),
    }
}

pub fn convert_private_trade(raw: &PoloniexPrivateTrade) -> PrivateTrade {
    PrivateTrade {
        global_trade_id: raw.global_trade_id,
        trade_id: raw.trade_id.clone(),
        date: raw.date.clone(),
        side: string_to_side(&raw.side),
        rate: string_to_decimal(&raw.rate),
        amount: string_to_decimal(&raw.amount),
        total: string_to_decimal(&raw.total),
        fee: string_to_decimal(&raw.fee),
        order_number: raw.order_number.clone(),
        category: raw.category.clone(),
    }
}

pub fn convert_open_order(raw: &PoloniexOpenOrder) -> OpenOrder {
    OpenOrder {
        order_number: raw.order_number.clone(),
        side: string_to_side(&raw.side),
        rate: string_to_decimal(&raw.rate),
        amount: string_to_decimal(&raw.amount),
        total: string_to_decimal(&raw.total),
    }
}

fn convert_resulting_trade(raw: &PoloniexResultingTrade) -> ResultingTrade {
    ResultingTrade {
        trade_id: raw.trade_id.clone(),
        date: raw.date.clone(),
        side: string_to_side(&raw.side),
        rate: string_to_decimal(&raw.rate),
        amount: string_to_decimal(&raw.amount),
        total: string_to_decimal(&raw.total),
    }
}

pub fn convert_order_ack(raw: &PoloniexOrderAck) -> OrderAck {
    OrderAck {
        order_number: raw.order_number.clone(),
        resulting_trades: raw
            .resulting_trades
            .iter()
            .map(convert_resulting_trade)
            .collect(),
    }
}

pub fn convert_cancel_ack(raw: &PoloniexCancelAck) -> CancelAck {
    CancelAck {
        success: raw.success == 1,
    }
}

pub fn convert_withdraw_ack(raw: PoloniexWithdrawAck) -> WithdrawAck {
    WithdrawAck {
        response: raw.response,
    }
}
