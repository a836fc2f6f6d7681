//! Demo 4: Global market overview
//!
//! Showcases: global metrics, dominance, totals in two currencies
//!
//! Run: CMC_PRO_API_KEY=... cargo run --bin global_metrics

use chrono::Utc;
use cmc_rest::{ClientConfig, CoinMarketCapClient, GlobalOptions};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  GLOBAL CRYPTO MARKET".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    // CMC_SANDBOX=1 targets the sandbox host with its public key
    let config = if std::env::var("CMC_SANDBOX").is_ok() {
        ClientConfig::sandbox()
    } else {
        ClientConfig::default()
    };
    let client = CoinMarketCapClient::with_config(cmc_rest::ApiKey::from_env()?, config)?;

    let global = client
        .get_global(&GlobalOptions::new().with_convert("USD,EUR"))
        .await?;
    let metrics = &global.data;

    println!(
        "  {:<28} {}",
        "Active cryptocurrencies:".dimmed(),
        metrics.active_cryptocurrencies
    );
    if let Some(exchanges) = metrics.active_exchanges {
        println!("  {:<28} {}", "Active exchanges:".dimmed(), exchanges);
    }
    if let Some(btc) = metrics.btc_dominance {
        println!("  {:<28} {:.2}%", "BTC dominance:".dimmed(), btc);
    }
    if let Some(eth) = metrics.eth_dominance {
        println!("  {:<28} {:.2}%", "ETH dominance:".dimmed(), eth);
    }
    println!();

    for currency in ["USD", "EUR"] {
        if let Some(quote) = metrics.quote_in(currency) {
            println!(
                "  {} {:<24} {:.0}",
                currency.yellow().bold(),
                "total market cap".dimmed(),
                quote.total_market_cap.unwrap_or_default()
            );
            println!(
                "  {} {:<24} {:.0}",
                currency.yellow().bold(),
                "24h volume".dimmed(),
                quote.total_volume_24h.unwrap_or_default()
            );
        }
    }

    let age = metrics
        .last_updated
        .map(|updated| (Utc::now() - updated).num_seconds());
    if let Some(age) = age {
        println!("\n  {} {}s ago", "Last updated".dimmed(), age);
    }
    println!("\n{} {} credit(s) used", "✓".green(), global.status.credit_count);
    Ok(())
}
