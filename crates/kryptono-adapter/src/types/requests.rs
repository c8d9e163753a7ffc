/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec::{decimal_str, decimal_str_option};
use super::enums::{OrderSide, OrderType};

// Field declaration order is the wire order, and the wire bytes are what gets
// signed. Reordering fields changes every signature.

/// Timestamp and validity bound carried at the end of every signed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestWindow {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// How long (ms) after `timestamp` the server still accepts the request.
    #[serde(rename = "recvWindow", default, skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl RequestWindow {
    /// Window stamped with the current wall-clock time.
    pub fn now() -> Self {
        Self::at(Utc::now().timestamp_millis())
    }

    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp,
            recv_window: None,
        }
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

impl Default for RequestWindow {
    fn default() -> Self {
        Self::now()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub order_symbol: String,
    pub order_side: OrderSide,
    #[serde(with = "decimal_str")]
    pub order_price: Decimal,
    #[serde(with = "decimal_str")]
    pub order_size: Decimal,
    #[serde(default, with = "decimal_str_option", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl NewOrderRequest {
    /// Limit order stamped with the current time.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        price: Decimal,
        size: Decimal,
    ) -> Self {
        Self {
            order_symbol: symbol.into(),
            order_side: side,
            order_price: price,
            order_size: size,
            stop_price: None,
            order_type: OrderType::Limit,
            window: RequestWindow::now(),
        }
    }

    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn with_window(mut self, window: RequestWindow) -> Self {
        self.window = window;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailRequest {
    pub order_id: String,
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl OrderDetailRequest {
    pub fn new(order_id: impl Into<String>, window: RequestWindow) -> Self {
        Self {
            order_id: order_id.into(),
            window,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub order_id: String,
    pub order_symbol: String,
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl CancelOrderRequest {
    pub fn new(
        order_id: impl Into<String>,
        order_symbol: impl Into<String>,
        window: RequestWindow,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_symbol: order_symbol.into(),
            window,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDetailsRequest {
    pub order_id: String,
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl TradeDetailsRequest {
    pub fn new(order_id: impl Into<String>, window: RequestWindow) -> Self {
        Self {
            order_id: order_id.into(),
            window,
        }
    }
}

/// Paged query used by the open and completed order lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPageRequest {
    pub symbol: String,
    pub limit: u32,
    /// Zero-based page index. Always sent, including page 0.
    pub page: u32,
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl OrderPageRequest {
    pub fn new(symbol: impl Into<String>, limit: u32, page: u32, window: RequestWindow) -> Self {
        Self {
            symbol: symbol.into(),
            limit,
            page,
            window,
        }
    }
}

/// History query used by the all-orders and trade-list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryRequest {
    pub symbol: String,
    pub limit: u32,
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl OrderHistoryRequest {
    pub fn new(symbol: impl Into<String>, limit: u32, window: RequestWindow) -> Self {
        Self {
            symbol: symbol.into(),
            limit,
            window,
        }
    }
}

/// Body of the account details and balances queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRequest {
    #[serde(flatten)]
    pub window: RequestWindow,
}

impl AccountRequest {
    pub fn new(window: RequestWindow) -> Self {
        Self { window }
    }
}
