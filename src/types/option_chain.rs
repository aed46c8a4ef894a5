#![allow(missing_docs)]
//! Option-chain wire types — the raw snapshot exactly as the NSE endpoints
//! serve it.
//!
//! Field names on the wire are inconsistent (`pChange` next to
//! `pchangeinOpenInterest` next to `bidprice`), so renames are declared per
//! field instead of with a container-level `rename_all`. The canonical,
//! analysis-ready model lives in [`crate::analytics::table`]; these structs
//! only mirror the payload.

use serde::{Deserialize, Serialize};

use crate::constants::{OPTION_CHAIN_EQUITIES_PATH, OPTION_CHAIN_INDICES_PATH};

// ---------------------------------------------------------------------------
// Request side
// ---------------------------------------------------------------------------

/// Which option-chain endpoint serves a given underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnderlyingKind {
    /// Index underlyings (NIFTY, BANKNIFTY, …).
    Indices,
    /// Single-stock underlyings (RELIANCE, TCS, …).
    Equities,
}

impl UnderlyingKind {
    /// API path for this kind of underlying.
    pub fn path(self) -> &'static str {
        match self {
            Self::Indices => OPTION_CHAIN_INDICES_PATH,
            Self::Equities => OPTION_CHAIN_EQUITIES_PATH,
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot envelope
// ---------------------------------------------------------------------------

/// Raw option-chain snapshot for one underlying.
///
/// Both containers are optional because a stale session makes the endpoint
/// serve empty or truncated bodies; container presence is validated by the
/// expiry-selection stage, not by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainSnapshot {
    /// All expiries: every strike entry the exchange lists for the symbol.
    #[serde(default)]
    pub records: Option<ChainRecords>,
    /// Nearest-expiry view the exchange pre-filters for its own UI.
    #[serde(default)]
    pub filtered: Option<ChainRecords>,
}

/// One container of strike entries plus snapshot metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainRecords {
    /// Expiry labels available for the symbol (`28-Aug-2025`, …).
    #[serde(default, rename = "expiryDates")]
    pub expiry_dates: Vec<String>,
    /// Strike entries, one per (strike, expiry) pair.
    #[serde(default)]
    pub data: Vec<StrikeEntry>,
    /// Quote timestamp (`25-Aug-2025 15:30:00`).
    #[serde(default)]
    pub timestamp: String,
    /// Spot value of the underlying at the timestamp.
    #[serde(default, rename = "underlyingValue")]
    pub underlying_value: f64,
}

/// One strike entry: the call and/or put quote at a (strike, expiry) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct StrikeEntry {
    #[serde(rename = "strikePrice")]
    pub strike_price: f64,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: String,
    /// Call-side quote (absent when no call is listed at this strike).
    #[serde(default, rename = "CE")]
    pub ce: Option<RawQuote>,
    /// Put-side quote (absent when no put is listed at this strike).
    #[serde(default, rename = "PE")]
    pub pe: Option<RawQuote>,
}

// ---------------------------------------------------------------------------
// Per-side quote record
// ---------------------------------------------------------------------------

/// One side's quote record with the full wire field set.
///
/// Quantities arrive as JSON numbers that are occasionally serialized with a
/// fractional part, hence `f64` throughout; the strike-table builder casts
/// them to their canonical types and drops the source-specific fields
/// (identifier, underlying echo, bid/ask, absolute change).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuote {
    #[serde(default, rename = "strikePrice")]
    pub strike_price: f64,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: String,
    /// Underlying symbol echoed into every record.
    #[serde(default)]
    pub underlying: Option<String>,
    /// Exchange contract identifier (`OPTIDXNIFTY28-08-2025CE24000.00`).
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default, rename = "openInterest")]
    pub open_interest: f64,
    #[serde(default, rename = "changeinOpenInterest")]
    pub change_in_open_interest: f64,
    #[serde(default, rename = "pchangeinOpenInterest")]
    pub pchange_in_open_interest: f64,
    #[serde(default, rename = "totalTradedVolume")]
    pub total_traded_volume: f64,
    #[serde(default, rename = "impliedVolatility")]
    pub implied_volatility: f64,
    #[serde(default, rename = "lastPrice")]
    pub last_price: f64,
    /// Absolute change in last price.
    #[serde(default)]
    pub change: f64,
    /// Percent change in last price.
    #[serde(default, rename = "pChange")]
    pub p_change: f64,
    #[serde(default, rename = "totalBuyQuantity")]
    pub total_buy_quantity: f64,
    #[serde(default, rename = "totalSellQuantity")]
    pub total_sell_quantity: f64,
    #[serde(default, rename = "bidQty")]
    pub bid_qty: f64,
    #[serde(default, rename = "bidprice")]
    pub bid_price: f64,
    #[serde(default, rename = "askQty")]
    pub ask_qty: f64,
    #[serde(default, rename = "askPrice")]
    pub ask_price: f64,
    /// Spot value echoed into every record.
    #[serde(default, rename = "underlyingValue")]
    pub underlying_value: f64,
}
