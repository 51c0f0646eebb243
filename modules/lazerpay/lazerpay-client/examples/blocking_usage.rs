//! Blocking usage of the Lazerpay client, for scripts without an async
//! runtime.
//!
//! Run with: cargo run --example blocking_usage -- <recipient> <amount>

use lazerpay_client::{BlockingLazerpayClient, TransferRequest};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("lazerpay_client=info")
        .init();

    let mut args = std::env::args().skip(1);
    let recipient = args
        .next()
        .unwrap_or_else(|| "0xF378c952d5266eF8e1783521a1395Fe40cDCe55B".to_owned());
    let amount: u64 = args.next().as_deref().unwrap_or("1").parse()?;

    let client = BlockingLazerpayClient::from_env()?;

    let response = client.transfer(&TransferRequest {
        amount,
        recipient,
        coin: "USDT".into(),
        blockchain: "Binance Smart Chain".into(),
    })?;

    println!("status: {}", response.status());
    println!("{}", response.text());
    Ok(())
}
