/*
[INPUT]:  Optional symbol filters
[OUTPUT]: Connectivity, clock and exchange metadata
[POS]:    HTTP layer - general public endpoints (no signature)
[UPDATE]: When adding general endpoints or changing response format
*/

use crate::http::endpoints::{EXCHANGE_INFORMATION, MARKET_PRICE, PING, SERVER_TIME};
use crate::http::{KryptonoClient, Result};
use crate::types::{ExchangeInformation, MarketPrice, PingResponse, ServerTime};

impl KryptonoClient {
    /// Test connectivity
    ///
    /// GET /api/v2/ping
    pub async fn ping(&self) -> Result<PingResponse> {
        self.get_public(&PING, &[]).await
    }

    /// Server clock in milliseconds
    ///
    /// GET /api/v2/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.get_public(&SERVER_TIME, &[]).await
    }

    /// Rate limits, currencies and tradable symbols
    ///
    /// GET /api/v2/exchange-info
    pub async fn exchange_information(&self) -> Result<ExchangeInformation> {
        self.get_public(&EXCHANGE_INFORMATION, &[]).await
    }

    /// Latest prices, for one symbol or all of them
    ///
    /// GET /api/v2/market-price[?symbol={symbol}]
    pub async fn market_price(&self, symbol: Option<&str>) -> Result<Vec<MarketPrice>> {
        match symbol.filter(|symbol| !symbol.is_empty()) {
            Some(symbol) => self.get_public(&MARKET_PRICE, &[("symbol", symbol)]).await,
            None => self.get_public(&MARKET_PRICE, &[]).await,
        }
    }
}
