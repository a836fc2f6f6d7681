//! Demo 1: Symbol to ID resolution
//!
//! Showcases: ID map lookup by symbol, token platforms
//!
//! Run: CMC_PRO_API_KEY=... cargo run --bin id_map -- BTC,ETH,USDC

use cmc_rest::{CoinMarketCapClient, IdMapOptions};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbols = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "BTC,ETH,USDC".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINMARKETCAP ID MAP".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = CoinMarketCapClient::from_env()?;
    let map = client
        .get_id_map(&IdMapOptions::new().with_symbol(symbols.as_str()))
        .await?;

    for entry in &map.data {
        let platform = match &entry.platform {
            Some(platform) => format!("token on {}", platform.name).dimmed(),
            None => "native coin".dimmed(),
        };
        println!(
            "  {:>8} {} {:<24} {}",
            entry.symbol.yellow().bold(),
            "→".dimmed(),
            entry.id.to_string().green(),
            platform
        );
    }

    println!(
        "\n{} {} entries, {} credit(s) used",
        "✓".green(),
        map.data.len(),
        map.status.credit_count
    );
    Ok(())
}
