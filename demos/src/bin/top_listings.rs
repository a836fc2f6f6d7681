//! Demo 2: Top listings by market cap
//!
//! Showcases: paginated listings, sorting, range filters
//!
//! Run: CMC_PRO_API_KEY=... cargo run --bin top_listings

use cmc_rest::{CoinMarketCapClient, ListingOptions, RangeFilter};
use cmc_types::{Decimal, ListingSort, SortDir};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(72).cyan());
    println!("{}", "  TOP 20 CRYPTOCURRENCIES (market cap above $1B)".cyan().bold());
    println!("{}", "═".repeat(72).cyan());
    println!();

    let client = CoinMarketCapClient::from_env()?;
    let options = ListingOptions::new()
        .with_limit(20)
        .with_market_cap(RangeFilter::at_least(Decimal::from(1_000_000_000u64)))
        .with_sort(ListingSort::MarketCap, Some(SortDir::Desc))
        .with_convert("USD");
    let listings = client.get_tickers(&options).await?;

    println!(
        "  {:>4}  {:<8} {:>14} {:>20} {:>9}",
        "RANK".dimmed(),
        "SYMBOL".dimmed(),
        "PRICE".dimmed(),
        "MARKET CAP".dimmed(),
        "24H".dimmed()
    );

    for entry in &listings.data {
        let Some(quote) = entry.quote_in("USD") else {
            continue;
        };
        let change = quote.percent_change_24h.unwrap_or_default();
        let change = if change.is_sign_negative() {
            format!("{:.2}%", change).red()
        } else {
            format!("+{:.2}%", change).green()
        };

        println!(
            "  {:>4}  {:<8} {:>14} {:>20} {:>9}",
            entry.cmc_rank.unwrap_or_default(),
            entry.symbol.yellow(),
            format!("${:.4}", quote.price.unwrap_or_default()),
            format!("${:.0}", quote.market_cap.unwrap_or_default()),
            change
        );
    }

    println!(
        "\n{} {} listings, {} credit(s) used",
        "✓".green(),
        listings.data.len(),
        listings.status.credit_count
    );
    Ok(())
}
