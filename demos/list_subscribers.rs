//! Async subscriber listing example.
//!
//! ```bash
//! cargo run --example list_subscribers
//! ```
//!
//! Env vars:
//! - `MAILERLITE_API_TOKEN` (required)
//! - `MAILERLITE_API_URL` (optional, defaults to the production API)
//! - `SUBSCRIBER_STATUS` (optional, e.g. `active` or `unsubscribed`)
//! - `LIMIT` (optional page size)

use mailerlite_sdk::{Client, ListSubscribers};
use serde_json::Value;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::builder_from_env()?
        .timeout(Duration::from_secs(30))
        .build()?;

    let params = ListSubscribers {
        filter_status: env_opt("SUBSCRIBER_STATUS"),
        limit: env_opt("LIMIT").and_then(|v| v.parse().ok()),
        ..ListSubscribers::default()
    };

    let count = client.subscribers().fetch_count().await?;
    if count.is_success() {
        let total = count.json::<Value>()?["total"].clone();
        println!("total subscribers: {total}");
    }

    let resp = client.subscribers().list(&params).await?;
    if !resp.is_success() {
        eprintln!("HTTP {}: {}", resp.status, resp.text_lossy());
        return Ok(());
    }

    let body: Value = resp.json()?;
    for subscriber in body["data"].as_array().into_iter().flatten() {
        println!(
            "{}\t{}\t{}",
            subscriber["id"].as_str().unwrap_or_default(),
            subscriber["email"].as_str().unwrap_or_default(),
            subscriber["status"].as_str().unwrap_or_default(),
        );
    }

    Ok(())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
