//! Binary to fetch one NSE option-chain snapshot and print the sentiment
//! summary plus the strike window around the at-the-money row.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin oc_check --features cli -- NIFTY
//! cargo run --bin oc_check --features cli -- BANKNIFTY 30-Sep-2025
//! cargo run --bin oc_check --features cli -- RELIANCE
//! ```

use std::env;

use nse_options_rs::analytics::annotate::SideAnnotations;
use nse_options_rs::analytics::expiry::days_to_expiry;
use nse_options_rs::constants::INDEX_SYMBOLS;
use nse_options_rs::types::option_chain::UnderlyingKind;
use nse_options_rs::{analyze, NseClient};

#[tokio::main]
async fn main() -> nse_options_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let symbol = args
        .next()
        .unwrap_or_else(|| "NIFTY".to_string())
        .to_uppercase();
    let expiry = args.next();

    let kind = if INDEX_SYMBOLS.contains(&symbol.as_str()) {
        UnderlyingKind::Indices
    } else {
        UnderlyingKind::Equities
    };

    let client = NseClient::new();

    if !client.is_market_open().await? {
        println!("(Market closed — quotes are from the last session)\n");
    }

    println!("Fetching option chain for {symbol}…");
    let snapshot = client.get_option_chain(kind, &symbol).await?;
    let analysis = analyze(&snapshot, expiry.as_deref())?;

    let table = &analysis.table;
    let summary = &analysis.summary;

    println!("\n{symbol} — expiry {} (as of {})", table.expiry, table.timestamp);
    if let Some(days) = days_to_expiry(&table.expiry, chrono::Local::now().date_naive()) {
        println!("Days to expiry: {days}");
    }
    println!("Spot: {:.2}", table.underlying_value);
    println!(
        "PCR(OI): {}   PCR(Vol): {}   Max pain: {}",
        summary.pcr_open_interest, summary.pcr_volume, summary.max_pain_strike
    );

    println!(
        "\n{:>12} {:>8} {:>10} {:>9}      {:>10}      {:<9} {:<10} {:<8} {:<12}",
        "CALL OI", "CHG OI%", "VOLUME", "LTP", "STRIKE", "LTP", "VOLUME", "CHG OI%", "PUT OI"
    );
    for (offset, row) in analysis.window.rows.iter().enumerate() {
        let ann = &analysis.annotations[offset];
        let atm = if offset == analysis.window.atm_offset { '>' } else { ' ' };
        let pain = if ann.max_pain { '*' } else { ' ' };
        println!(
            "{:>12} {:>8.1} {:>10} {:>9.2} {} {atm}{:>10.2}{pain} {} {:<9.2} {:<10} {:<8.1} {:<12}",
            row.call.open_interest,
            row.call.percent_change_open_interest,
            row.call.total_traded_volume,
            row.call.last_price,
            side_flags(&ann.call),
            row.strike,
            side_flags(&ann.put),
            row.put.last_price,
            row.put.total_traded_volume,
            row.put.percent_change_open_interest,
            row.put.open_interest,
        );
    }
    println!("\n  > ATM row   * max pain   # in the money   ! sell qty over buy qty");

    Ok(())
}

/// Two-character flag column for one side of a row.
fn side_flags(side: &SideAnnotations) -> String {
    format!(
        "{}{}",
        if side.in_the_money { '#' } else { ' ' },
        if side.sell_over_buy { '!' } else { ' ' },
    )
}
