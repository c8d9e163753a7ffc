/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{BaseCurrency, Coin, Order, PublicTrade, RateLimit, SymbolInfo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerTime {
    pub server_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeInformation {
    pub timezone: String,
    pub server_time: i64,
    #[serde(default)]
    pub rate_limits: Vec<RateLimit>,
    #[serde(default)]
    pub base_currencies: Vec<BaseCurrency>,
    #[serde(default)]
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

impl ExchangeInformation {
    pub fn symbol(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|info| info.symbol == symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeHistory {
    pub symbol: String,
    pub limit: u32,
    pub history: Vec<PublicTrade>,
    pub time: i64,
}

/// Outcome of a dry-run order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOrderResponse {
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub order_id: String,
    pub order_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    pub total: u32,
    pub list: Vec<Order>,
}
