/*
[INPUT]:  Signed order requests (body HMAC in the Signature header)
[OUTPUT]: Orders, fills and order pages
[POS]:    HTTP layer - order endpoints (require API key + body signature)
[UPDATE]: When adding order endpoints or changing order flow
*/

use crate::http::endpoints::{
    ALL_ORDERS, CANCEL_ORDER, COMPLETED_ORDERS, NEW_ORDER, OPEN_ORDERS, ORDER_DETAIL,
    TEST_NEW_ORDER, TRADE_DETAILS, TRADE_LIST,
};
use crate::http::{KryptonoClient, Result};
use crate::types::{
    CancelOrderRequest, CancelOrderResponse, NewOrderRequest, Order, OrderDetailRequest,
    OrderHistoryRequest, OrderPage, OrderPageRequest, TestOrderResponse, Trade,
    TradeDetailsRequest,
};

impl KryptonoClient {
    /// Place an order
    ///
    /// POST /api/v2/order/add
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<Order> {
        self.send_private(&NEW_ORDER, request).await
    }

    /// Validate an order without placing it
    ///
    /// POST /api/v2/order/test
    pub async fn test_new_order(&self, request: &NewOrderRequest) -> Result<TestOrderResponse> {
        self.send_private(&TEST_NEW_ORDER, request).await
    }

    /// POST /api/v2/order/details
    pub async fn order_detail(&self, request: &OrderDetailRequest) -> Result<Order> {
        self.send_private(&ORDER_DETAIL, request).await
    }

    /// Cancel an open order
    ///
    /// DELETE /api/v2/order/cancel
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<CancelOrderResponse> {
        self.send_private(&CANCEL_ORDER, request).await
    }

    /// Fills belonging to one order
    ///
    /// POST /api/v2/order/trade-detail
    pub async fn trade_details(&self, request: &TradeDetailsRequest) -> Result<Vec<Trade>> {
        self.send_private(&TRADE_DETAILS, request).await
    }

    /// POST /api/v2/order/list/open
    pub async fn open_orders(&self, request: &OrderPageRequest) -> Result<OrderPage> {
        self.send_private(&OPEN_ORDERS, request).await
    }

    /// POST /api/v2/order/list/completed
    pub async fn completed_orders(&self, request: &OrderPageRequest) -> Result<OrderPage> {
        self.send_private(&COMPLETED_ORDERS, request).await
    }

    /// POST /api/v2/order/list/all
    pub async fn all_orders(&self, request: &OrderHistoryRequest) -> Result<Vec<Order>> {
        self.send_private(&ALL_ORDERS, request).await
    }

    /// The account's own fills for a symbol
    ///
    /// POST /api/v2/order/list/trades
    pub async fn trade_list(&self, request: &OrderHistoryRequest) -> Result<Vec<Trade>> {
        self.send_private(&TRADE_LIST, request).await
    }
}
