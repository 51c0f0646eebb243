//! Async usage of the Lazerpay client.
//!
//! Reads `LAZERPAY_PUBLIC_KEY`, `LAZERPAY_SECRET_KEY` and optionally
//! `LAZERPAY_BASE_URL` from the environment.
//!
//! Run with: cargo run --example async_usage -- <reference>

use std::time::Duration;

use lazerpay_client::{ClientError, InitializeTransactionRequest, LazerpayClient, Request};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lazerpay_client=debug")),
        )
        .init();

    let reference = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-reference-0001".to_owned());

    let client = LazerpayClient::from_env()?;

    println!("=== Accepted coins ===");
    let request = Request::accepted_coins()
        .with_timeout(Duration::from_secs(10));
    let coins = client.execute(request).await?;
    println!("{}", coins.text());

    println!("\n=== Initialize transaction {reference} ===");
    let init = InitializeTransactionRequest {
        reference: reference.clone(),
        amount: "1000".into(),
        customer_name: "Demo Customer".into(),
        customer_email: "demo@example.com".into(),
        currency: "USD".into(),
        coin: "USDT".into(),
        accept_partial_payment: true,
    };
    match client.initialize_transaction(&init).await {
        Ok(response) => println!("{}", response.text()),
        Err(ClientError::Gateway { status, body }) => {
            println!("gateway refused ({status}): {body}");
        }
        Err(e) => return Err(e.into()),
    }

    println!("\n=== Verify transaction {reference} ===");
    match client.verify_transaction(&reference).await {
        Ok(response) => println!("{}", response.text()),
        Err(e) => println!("verification failed: {e}"),
    }

    Ok(())
}
