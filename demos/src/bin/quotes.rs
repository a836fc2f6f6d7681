//! Demo 3: Multi-currency quotes
//!
//! Showcases: quotes by symbol, conversion currencies, skip_invalid
//!
//! Run: CMC_PRO_API_KEY=... cargo run --bin quotes -- BTC,ETH,NOTACOIN

use cmc_rest::{CoinMarketCapClient, QuotesOptions, RestError};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbols = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "BTC,ETH,SOL".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  LATEST QUOTES (USD)".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = CoinMarketCapClient::from_env()?;
    let options = QuotesOptions::by_symbol(symbols.as_str())
        .with_convert("USD")
        .with_skip_invalid(true);

    let quotes = match client.get_quotes(&options).await {
        Ok(quotes) => quotes,
        Err(RestError::Api { code, message, .. }) => {
            println!("{} API error {}: {}", "✗".red(), code, message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut entries: Vec<_> = quotes.data.values().collect();
    entries.sort_by_key(|entry| entry.cmc_rank.unwrap_or(u64::MAX));

    for entry in entries {
        match entry.price_in("USD") {
            Some(price) => println!(
                "  {:<8} {:<20} {}",
                entry.symbol.yellow().bold(),
                entry.name,
                format!("${:.4}", price).green()
            ),
            None => println!("  {:<8} {:<20} {}", entry.symbol.yellow(), entry.name, "n/a".dimmed()),
        }
    }

    if let Some(notice) = &quotes.status.notice {
        println!("\n{} {}", "!".yellow(), notice);
    }
    println!("\n{} {} credit(s) used", "✓".green(), quotes.status.credit_count);
    Ok(())
}
