pub mod core;
pub mod exchanges;

pub use crate::core::config::ExchangeConfig;
pub use crate::core::errors::ExchangeError;
pub use crate::core::traits::{
    AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer, Withdrawals,
};
pub use crate::core::types::*;
pub use crate::exchanges::poloniex::{
    build_connector, build_public_connector, PoloniexConnector,
};
