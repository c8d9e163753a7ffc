/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    #[serde(rename = "BUY", alias = "buy")]
    Buy,
    #[serde(rename = "SELL", alias = "sell")]
    Sell,
}

/// Order type. Requests use the upper-case spelling; responses echo it in
/// lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "LIMIT", alias = "limit")]
    Limit,
    #[serde(rename = "MARKET", alias = "market")]
    Market,
    #[serde(rename = "STOP_LOSS", alias = "stop_loss")]
    StopLoss,
    #[serde(rename = "TAKE_PROFIT", alias = "take_profit")]
    TakeProfit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "OPEN", alias = "open")]
    Open,
    #[serde(rename = "FILLED", alias = "filled")]
    Filled,
    #[serde(rename = "PARTIAL_FILL", alias = "partial_fill")]
    PartialFill,
    #[serde(rename = "CANCELED", alias = "canceled", alias = "cancelled")]
    Canceled,
    #[serde(rename = "CANCELING", alias = "canceling")]
    Canceling,
}

impl OrderStatus {
    /// Whether the order can still trade.
    pub fn is_active(self) -> bool {
        matches!(self, OrderStatus::Open | OrderStatus::PartialFill)
    }
}
