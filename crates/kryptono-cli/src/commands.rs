/*
[INPUT]:  Parsed subcommand, configured client and request window
[OUTPUT]: JSON value of the exchange response
[POS]:    Command layer - one subcommand per exchange operation
[UPDATE]: When adding endpoints to the client
*/

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use kryptono_adapter::{
    AccountRequest, CancelOrderRequest, KryptonoClient, NewOrderRequest, OrderDetailRequest,
    OrderHistoryRequest, OrderPageRequest, OrderSide, OrderType, RequestWindow,
    TradeDetailsRequest,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Test connectivity
    Ping,
    /// Server clock
    Time,
    /// Rate limits, currencies and symbols
    ExchangeInfo,
    /// Latest prices
    Price {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Recent public trades
    Trades { symbol: String },
    /// Order book depth
    Book { symbol: String },
    /// Place an order
    Order {
        symbol: String,
        #[arg(value_enum)]
        side: SideArg,
        price: Decimal,
        size: Decimal,
        #[arg(long = "type", value_enum, default_value_t = OrderTypeArg::Limit)]
        order_type: OrderTypeArg,
        #[arg(long)]
        stop_price: Option<Decimal>,
        /// Validate through the test endpoint without placing
        #[arg(long)]
        test: bool,
    },
    /// Look up one order
    OrderDetail { order_id: String },
    /// Cancel an open order
    Cancel { order_id: String, symbol: String },
    /// Fills for one order
    OrderTrades { order_id: String },
    OpenOrders {
        symbol: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    CompletedOrders {
        symbol: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    AllOrders {
        symbol: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// The account's own fills
    MyTrades {
        symbol: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Account profile
    Account,
    Balances,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for OrderSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => OrderSide::Buy,
            SideArg::Sell => OrderSide::Sell,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTypeArg {
    Limit,
    Market,
    StopLoss,
    TakeProfit,
}

impl From<OrderTypeArg> for OrderType {
    fn from(order_type: OrderTypeArg) -> Self {
        match order_type {
            OrderTypeArg::Limit => OrderType::Limit,
            OrderTypeArg::Market => OrderType::Market,
            OrderTypeArg::StopLoss => OrderType::StopLoss,
            OrderTypeArg::TakeProfit => OrderType::TakeProfit,
        }
    }
}

impl Command {
    /// Whether the command hits a signed endpoint
    pub fn is_private(&self) -> bool {
        !matches!(
            self,
            Command::Ping
                | Command::Time
                | Command::ExchangeInfo
                | Command::Price { .. }
                | Command::Trades { .. }
                | Command::Book { .. }
        )
    }

    /// Run the command and return the response as JSON
    pub async fn run(&self, client: &KryptonoClient, window: RequestWindow) -> Result<Value> {
        debug!(command = ?self, "running command");
        match self {
            Command::Ping => to_json(client.ping().await.context("ping")?),
            Command::Time => to_json(client.server_time().await.context("server time")?),
            Command::ExchangeInfo => to_json(
                client
                    .exchange_information()
                    .await
                    .context("exchange information")?,
            ),
            Command::Price { symbol } => to_json(
                client
                    .market_price(symbol.as_deref())
                    .await
                    .context("market price")?,
            ),
            Command::Trades { symbol } => {
                to_json(client.trade_history(symbol).await.context("trade history")?)
            }
            Command::Book { symbol } => {
                to_json(client.order_book(symbol).await.context("order book")?)
            }
            Command::Order {
                symbol,
                side,
                price,
                size,
                order_type,
                stop_price,
                test,
            } => {
                let mut request = NewOrderRequest::limit(symbol.clone(), (*side).into(), *price, *size)
                    .with_order_type((*order_type).into())
                    .with_window(window);
                if let Some(stop_price) = stop_price {
                    request = request.with_stop_price(*stop_price);
                }
                if *test {
                    to_json(client.test_new_order(&request).await.context("test order")?)
                } else {
                    to_json(client.new_order(&request).await.context("new order")?)
                }
            }
            Command::OrderDetail { order_id } => {
                let request = OrderDetailRequest::new(order_id.clone(), window);
                to_json(client.order_detail(&request).await.context("order detail")?)
            }
            Command::Cancel { order_id, symbol } => {
                let request = CancelOrderRequest::new(order_id.clone(), symbol.clone(), window);
                to_json(client.cancel_order(&request).await.context("cancel order")?)
            }
            Command::OrderTrades { order_id } => {
                let request = TradeDetailsRequest::new(order_id.clone(), window);
                to_json(client.trade_details(&request).await.context("trade details")?)
            }
            Command::OpenOrders {
                symbol,
                limit,
                page,
            } => {
                let request = OrderPageRequest::new(symbol.clone(), *limit, *page, window);
                to_json(client.open_orders(&request).await.context("open orders")?)
            }
            Command::CompletedOrders {
                symbol,
                limit,
                page,
            } => {
                let request = OrderPageRequest::new(symbol.clone(), *limit, *page, window);
                to_json(
                    client
                        .completed_orders(&request)
                        .await
                        .context("completed orders")?,
                )
            }
            Command::AllOrders { symbol, limit } => {
                let request = OrderHistoryRequest::new(symbol.clone(), *limit, window);
                to_json(client.all_orders(&request).await.context("all orders")?)
            }
            Command::MyTrades { symbol, limit } => {
                let request = OrderHistoryRequest::new(symbol.clone(), *limit, window);
                to_json(client.trade_list(&request).await.context("trade list")?)
            }
            Command::Account => {
                let request = AccountRequest::new(window);
                to_json(
                    client
                        .account_information(&request)
                        .await
                        .context("account information")?,
                )
            }
            Command::Balances => {
                let request = AccountRequest::new(window);
                to_json(
                    client
                        .account_balances(&request)
                        .await
                        .context("account balances")?,
                )
            }
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("encode response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use kryptono_adapter::{ClientConfig, Credentials};
    use std::str::FromStr;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        TestCli::try_parse_from(std::iter::once("kryptono-cli").chain(args.iter().copied()))
            .expect("arguments parse")
            .command
    }

    #[test]
    fn test_parse_order_command() {
        let command = parse(&[
            "order",
            "KNOW_ETH",
            "buy",
            "0.0000123",
            "7777",
            "--type",
            "stop-loss",
            "--stop-price",
            "0.00001",
            "--test",
        ]);

        assert_eq!(
            command,
            Command::Order {
                symbol: "KNOW_ETH".to_string(),
                side: SideArg::Buy,
                price: Decimal::from_str("0.0000123").unwrap(),
                size: Decimal::from(7777),
                order_type: OrderTypeArg::StopLoss,
                stop_price: Some(Decimal::from_str("0.00001").unwrap()),
                test: true,
            }
        );
        assert!(command.is_private());
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            parse(&["open-orders", "KNOW_BTC"]),
            Command::OpenOrders {
                symbol: "KNOW_BTC".to_string(),
                limit: 10,
                page: 0
            }
        );
        assert_eq!(parse(&["price"]), Command::Price { symbol: None });
        assert!(!parse(&["book", "KNOW_BTC"]).is_private());
    }

    #[test]
    fn test_rejects_invalid_price() {
        let result = TestCli::try_parse_from(["kryptono-cli", "order", "KNOW_ETH", "buy", "abc", "1"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_test_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/order/test"))
            .and(header(
                "signature",
                "a36b5ab0fcf4a203101f9df0dcb149077e6b6215c2495a43f2c8a977dbdf0e85",
            ))
            .and(body_string(
                r#"{"order_symbol":"KNOW_ETH","order_side":"BUY","order_price":"0.0000123","order_size":"7777","type":"LIMIT","timestamp":1507725176599,"recvWindow":5000}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"result":true}"#, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = KryptonoClient::with_config_and_base_url(
            ClientConfig::default(),
            &server.uri(),
            Some(Credentials::new("key", "4a894c5c-8a7e-4337-bb6b-9fde16e3dddd")),
        )
        .expect("client init");

        let command = parse(&["order", "KNOW_ETH", "buy", "0.0000123", "7777", "--test"]);
        let output = command
            .run(&client, RequestWindow::at(1_507_725_176_599).with_recv_window(5000))
            .await
            .expect("command runs");

        assert_eq!(output, serde_json::json!({ "result": true }));
    }

    #[tokio::test]
    async fn test_run_reports_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/ping"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client =
            KryptonoClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), None)
                .expect("client init");
        let err = Command::Ping
            .run(&client, RequestWindow::now())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("503"));
    }
}
