#![allow(missing_docs)]
//! Market-status wire types — per-segment open/closed state.

use serde::Deserialize;

/// Response from `GET /api/marketStatus`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketStatusResponse {
    /// One entry per market segment (capital market, currency, …).
    #[serde(default, rename = "marketState")]
    pub market_state: Vec<MarketState>,
}

/// Open/closed state of one market segment.
///
/// Only string fields are modeled; the numeric fields of this payload switch
/// between numbers and pre-formatted strings across segments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketState {
    /// Segment name (`Capital Market`, `Currency`, …).
    #[serde(default)]
    pub market: String,
    /// `Open` or `Closed`.
    #[serde(default, rename = "marketStatus")]
    pub market_status: String,
    /// Trade date and session time (`25-Aug-2025 15:30`).
    #[serde(default, rename = "tradeDate")]
    pub trade_date: String,
    /// Benchmark index shown for the segment (`NIFTY 50` for capital market).
    #[serde(default)]
    pub index: String,
    /// Human-readable banner (`Market is Closed`).
    #[serde(default, rename = "marketStatusMessage")]
    pub market_status_message: String,
}

impl MarketState {
    /// True unless the exchange reports this segment `Closed`.
    pub fn is_open(&self) -> bool {
        self.market_status != "Closed"
    }
}
