//! Blocking client demo: list timezones, then fetch one subscriber through a raw path.
//!
//! ```bash
//! cargo run --example blocking_timezones --no-default-features --features blocking,rustls
//! ```

use mailerlite_sdk::BlockingClient;
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    let client = BlockingClient::from_env()?;

    let timezones: Value = client.timezones().list()?.json()?;
    let names: Vec<&str> = timezones["data"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|tz| tz["name"].as_str())
        .take(5)
        .collect();
    println!("first timezones: {names:?}");

    if let Ok(email) = std::env::var("SUBSCRIBER_EMAIL") {
        let resp = client.get(&format!("subscribers/{email}"))?;
        println!("HTTP {}\n{}", resp.status, resp.text_lossy());
    }

    Ok(())
}
