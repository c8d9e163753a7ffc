/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec::{
    decimal_str, integral_u32, null_as_default, skip_null_entries, DynamicValue, PriceLevel,
    QuotedAmount,
};
use super::enums::{OrderSide, OrderStatus, OrderType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimit {
    #[serde(rename = "type")]
    pub limit_type: String,
    pub interval: String,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCurrency {
    pub currency_code: String,
    #[serde(with = "decimal_str")]
    pub minimum_total_order: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub currency_code: String,
    pub name: String,
    #[serde(with = "decimal_str")]
    pub minimum_order_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    /// Decimal places allowed in order sizes.
    #[serde(with = "integral_u32")]
    pub amount_limit_decimal: u32,
    /// Decimal places allowed in order prices.
    #[serde(with = "integral_u32")]
    pub price_limit_decimal: u32,
    pub allow_trading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub symbol: String,
    #[serde(with = "decimal_str")]
    pub price: Decimal,
    pub updated_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicTrade {
    pub id: i64,
    #[serde(with = "decimal_str")]
    pub price: Decimal,
    #[serde(with = "decimal_str")]
    pub qty: Decimal,
    #[serde(rename = "isBuyerMaker")]
    pub is_buyer_maker: bool,
    pub time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub symbol: String,
    pub limit: u32,
    pub asks: Vec<PriceLevel>,
    pub bids: Vec<PriceLevel>,
    pub time: i64,
}

impl OrderBook {
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }
}

/// An order as returned by the place, detail and list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub account_id: String,
    pub order_symbol: String,
    pub order_side: OrderSide,
    pub status: OrderStatus,
    #[serde(rename = "createTime")]
    pub create_time: i64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "decimal_str")]
    pub order_price: Decimal,
    #[serde(with = "decimal_str")]
    pub order_size: Decimal,
    #[serde(with = "decimal_str")]
    pub executed: Decimal,
    #[serde(with = "decimal_str")]
    pub stop_price: Decimal,
    #[serde(with = "decimal_str")]
    pub avg: Decimal,
    pub total: QuotedAmount,
}

impl Order {
    /// Size still waiting to be filled.
    pub fn remaining(&self) -> Decimal {
        (self.order_size - self.executed).max(Decimal::ZERO)
    }
}

/// A fill belonging to one of the account's orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub hex_id: String,
    pub symbol: String,
    pub order_id: String,
    pub order_side: OrderSide,
    #[serde(with = "decimal_str")]
    pub price: Decimal,
    #[serde(with = "decimal_str")]
    pub quantity: Decimal,
    pub fee: QuotedAmount,
    pub total: QuotedAmount,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(with = "decimal_str")]
    pub total: Decimal,
    #[serde(with = "decimal_str")]
    pub available: Decimal,
    #[serde(with = "decimal_str")]
    pub in_order: Decimal,
}

/// Object id attached to login history records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordId {
    pub timestamp: i64,
    pub machine_identifier: i64,
    pub process_identifier: i64,
    pub counter: i64,
    pub time: i64,
    pub date: i64,
    pub time_second: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginHistory {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub account_id: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub login_at: i64,
    #[serde(default)]
    pub os_name: Option<String>,
    #[serde(default)]
    pub browser_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "sentEmail", default)]
    pub sent_email: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeFee {
    #[serde(with = "decimal_str")]
    pub standard_fee: Decimal,
    #[serde(with = "decimal_str")]
    pub know_fee: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInformation {
    pub account_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<DynamicValue>,
    #[serde(default)]
    pub enable_google_2fa: bool,
    pub status: String,
    pub create_at: i64,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub chat_password: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub banks: Vec<Option<DynamicValue>>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<DynamicValue>,
    #[serde(default)]
    pub kyc_level: Option<String>,
    #[serde(default)]
    pub last_login_history: Option<LoginHistory>,
    #[serde(default)]
    pub commission_status: bool,
    #[serde(default)]
    pub account_kyc: Option<DynamicValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kyc_reject_infos: Vec<Option<DynamicValue>>,
    #[serde(default)]
    pub allow_order: i32,
    #[serde(default)]
    pub disable_withdraw: i32,
    #[serde(default)]
    pub referral_id: Option<String>,
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub favorite_pairs: Vec<String>,
    #[serde(default)]
    pub chat_server: Option<String>,
    #[serde(default)]
    pub exchange_fee: Option<ExchangeFee>,
}

impl AccountInformation {
    pub fn can_place_orders(&self) -> bool {
        self.allow_order != 0
    }

    pub fn can_withdraw(&self) -> bool {
        self.disable_withdraw == 0
    }
}
