/*
[INPUT]:  Operation names and configured base URLs
[OUTPUT]: Static endpoint metadata and fully-qualified request URLs
[POS]:    HTTP layer - endpoint table
[UPDATE]: When adding endpoints or moving them between hosts
*/

use std::fmt;

use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

use crate::http::Result;

pub const GENERAL_BASE_URL: &str = "https://p.kryptono.exchange/k";
pub const MARKET_BASE_URL: &str = "https://engine2.kryptono.exchange";

/// Which configured host an endpoint lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    General,
    Market,
    Account,
}

/// Whether an endpoint needs a body signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_method(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Static description of one exchange operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub base: ApiBase,
    pub path: &'static str,
    pub access: Access,
    pub expected_status: &'static [u16],
}

const OK: &[u16] = &[200];

const fn public(name: &'static str, base: ApiBase, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method: HttpMethod::Get,
        base,
        path,
        access: Access::Public,
        expected_status: OK,
    }
}

const fn private(name: &'static str, method: HttpMethod, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        method,
        base: ApiBase::Account,
        path,
        access: Access::Private,
        expected_status: OK,
    }
}

pub const PING: Endpoint = public("ping", ApiBase::General, "/api/v2/ping");
pub const SERVER_TIME: Endpoint = public("server_time", ApiBase::General, "/api/v2/time");
pub const EXCHANGE_INFORMATION: Endpoint =
    public("exchange_information", ApiBase::General, "/api/v2/exchange-info");
pub const MARKET_PRICE: Endpoint = public("market_price", ApiBase::General, "/api/v2/market-price");
pub const TRADE_HISTORY: Endpoint = public("trade_history", ApiBase::Market, "/api/v1/ht");
pub const ORDER_BOOK: Endpoint = public("order_book", ApiBase::Market, "/api/v1/dp");

pub const NEW_ORDER: Endpoint = private("new_order", HttpMethod::Post, "/api/v2/order/add");
pub const TEST_NEW_ORDER: Endpoint =
    private("test_new_order", HttpMethod::Post, "/api/v2/order/test");
pub const ORDER_DETAIL: Endpoint =
    private("order_detail", HttpMethod::Post, "/api/v2/order/details");
pub const CANCEL_ORDER: Endpoint =
    private("cancel_order", HttpMethod::Delete, "/api/v2/order/cancel");
pub const TRADE_DETAILS: Endpoint =
    private("trade_details", HttpMethod::Post, "/api/v2/order/trade-detail");
pub const OPEN_ORDERS: Endpoint =
    private("open_orders", HttpMethod::Post, "/api/v2/order/list/open");
pub const COMPLETED_ORDERS: Endpoint =
    private("completed_orders", HttpMethod::Post, "/api/v2/order/list/completed");
pub const ALL_ORDERS: Endpoint = private("all_orders", HttpMethod::Post, "/api/v2/order/list/all");
pub const TRADE_LIST: Endpoint =
    private("trade_list", HttpMethod::Post, "/api/v2/order/list/trades");
pub const ACCOUNT_INFORMATION: Endpoint =
    private("account_information", HttpMethod::Get, "/api/v2/account/details");
pub const ACCOUNT_BALANCES: Endpoint =
    private("account_balances", HttpMethod::Get, "/api/v2/account/balances");

/// Every operation the client knows about
pub const ALL: &[Endpoint] = &[
    PING,
    SERVER_TIME,
    EXCHANGE_INFORMATION,
    MARKET_PRICE,
    TRADE_HISTORY,
    ORDER_BOOK,
    NEW_ORDER,
    TEST_NEW_ORDER,
    ORDER_DETAIL,
    CANCEL_ORDER,
    TRADE_DETAILS,
    OPEN_ORDERS,
    COMPLETED_ORDERS,
    ALL_ORDERS,
    TRADE_LIST,
    ACCOUNT_INFORMATION,
    ACCOUNT_BALANCES,
];

/// Base URLs for the three hosts.
///
/// Paths are appended verbatim, so a base with a path prefix
/// (`https://p.kryptono.exchange/k`) keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoints {
    pub general: String,
    pub market: String,
    pub account: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            general: GENERAL_BASE_URL.to_string(),
            market: MARKET_BASE_URL.to_string(),
            account: GENERAL_BASE_URL.to_string(),
        }
    }
}

impl ApiEndpoints {
    /// Route every endpoint to one host
    pub fn single(base_url: &str) -> Self {
        Self {
            general: base_url.to_string(),
            market: base_url.to_string(),
            account: base_url.to_string(),
        }
    }

    pub fn base(&self, base: ApiBase) -> &str {
        match base {
            ApiBase::General => &self.general,
            ApiBase::Market => &self.market,
            ApiBase::Account => &self.account,
        }
    }

    /// Full URL for `endpoint`, with `query` appended when non-empty
    pub fn url_for(&self, endpoint: &Endpoint, query: &[(&str, &str)]) -> Result<Url> {
        let base = self.base(endpoint.base).trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, endpoint.path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}
