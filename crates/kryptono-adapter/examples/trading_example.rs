/*
[INPUT]:  API credentials from the environment and order parameters
[OUTPUT]: Test order validation, balances and open orders
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use rust_decimal::Decimal;
use kryptono_adapter::*;
use std::str::FromStr;

/// Example: Trading operations (requires API key + body signature)
///
/// Set KRYPTONO_API_KEY and KRYPTONO_API_SECRET before running.
#[tokio::main]
async fn main() {
    println!("=== Kryptono Trading Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Missing credentials: {}", e);
            return;
        }
    };

    let client = match KryptonoClient::with_credentials(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let order = NewOrderRequest::limit(
        "KNOW_ETH",
        OrderSide::Buy,
        Decimal::from_str("0.0000123").unwrap_or_default(),
        Decimal::from(7777),
    )
    .with_window(RequestWindow::now().with_recv_window(5000));

    // The test endpoint validates the order without placing it
    println!("Validating order {:?}...", order);
    match client.test_new_order(&order).await {
        Ok(result) => println!("✓ Accepted: {}", result.result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying balances...");
    match client.account_balances(&AccountRequest::new(RequestWindow::now())).await {
        Ok(balances) => {
            for balance in balances {
                println!("  {} available {}", balance.currency_code, balance.available);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open orders...");
    let page = OrderPageRequest::new("KNOW_ETH", 10, 0, RequestWindow::now());
    match client.open_orders(&page).await {
        Ok(page) => println!("✓ {} open orders", page.total),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
