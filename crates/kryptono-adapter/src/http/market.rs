/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Recent public trades and order book snapshots
[POS]:    HTTP layer - market data endpoints on the engine host (no signature)
[UPDATE]: When adding market endpoints or changing response format
*/

use crate::http::endpoints::{ORDER_BOOK, TRADE_HISTORY};
use crate::http::{KryptonoClient, Result};
use crate::types::{OrderBook, TradeHistory};

impl KryptonoClient {
    /// Recent public trades
    ///
    /// GET /api/v1/ht?symbol={symbol}
    pub async fn trade_history(&self, symbol: &str) -> Result<TradeHistory> {
        self.get_public(&TRADE_HISTORY, &[("symbol", symbol)]).await
    }

    /// Order book depth
    ///
    /// GET /api/v1/dp?symbol={symbol}
    pub async fn order_book(&self, symbol: &str) -> Result<OrderBook> {
        self.get_public(&ORDER_BOOK, &[("symbol", symbol)]).await
    }
}
