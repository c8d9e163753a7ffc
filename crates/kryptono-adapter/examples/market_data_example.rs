/*
[INPUT]:  Symbol identifier (e.g., "KNOW_BTC")
[OUTPUT]: Market data (prices, recent trades, depth)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use kryptono_adapter::*;

/// Example: Query market data (no credentials required)
#[tokio::main]
async fn main() {
    println!("=== Kryptono Market Data Example ===\n");

    let client = match KryptonoClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let symbol = "KNOW_BTC";

    println!("Pinging exchange...");
    match client.ping().await {
        Ok(pong) => println!("✓ Ping: {:?}", pong),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying price for {}...", symbol);
    match client.market_price(Some(symbol)).await {
        Ok(prices) => println!("✓ Price: {:?}", prices),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades for {}...", symbol);
    match client.trade_history(symbol).await {
        Ok(history) => println!("✓ {} trades", history.history.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", symbol);
    match client.order_book(symbol).await {
        Ok(book) => println!(
            "✓ Best bid {:?}, best ask {:?}",
            book.best_bid(),
            book.best_ask()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
