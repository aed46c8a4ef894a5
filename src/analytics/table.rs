//! Canonical strike table — the full outer join of one expiry's call and
//! put records, keyed and ordered by strike price.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analytics::expiry::ExpirySelection;
use crate::analytics::round1;
use crate::error::{NseError, Result};
use crate::types::option_chain::RawQuote;

/// One side (call or put) of one strike, projected onto the canonical field
/// subset.
///
/// Source-specific wire fields (identifier, underlying echo, bid/ask,
/// absolute change) are dropped during projection. `Default` is the all-zero
/// quote used for a side with no record at its strike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub strike_price: f64,
    pub total_buy_quantity: u64,
    pub total_sell_quantity: u64,
    pub total_traded_volume: u64,
    pub open_interest: u64,
    /// Percent change in open interest, rounded to 1 decimal.
    pub percent_change_open_interest: f64,
    /// Percent change in last price, rounded to 1 decimal.
    pub percent_change_last_price: f64,
    /// Implied volatility, rounded to 1 decimal.
    pub implied_volatility: f64,
    pub last_price: f64,
}

/// A call and a put quote merged at one strike, plus the pain columns the
/// max-pain scan fills in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrikeRow {
    pub strike: f64,
    pub call: Quote,
    pub put: Quote,
    /// Aggregate call-writer payoff were expiry to settle at this strike.
    /// Zero until [`compute_max_pain`](crate::analytics::max_pain::compute_max_pain) runs.
    pub call_pain: f64,
    /// Aggregate put-writer payoff were expiry to settle at this strike.
    pub put_pain: f64,
    /// `call_pain + put_pain`.
    pub total_pain: f64,
}

/// The canonical per-expiry table: merged rows in strictly ascending strike
/// order, plus the snapshot metadata the later stages need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrikeTable {
    /// The expiry the rows belong to.
    pub expiry: String,
    /// Quote timestamp echoed from the snapshot.
    pub timestamp: String,
    /// Spot value of the underlying at the timestamp.
    pub underlying_value: f64,
    /// Merged rows; strikes are unique and strictly ascending.
    pub rows: Vec<StrikeRow>,
}

impl StrikeTable {
    /// Number of strike rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outer-join one expiry's call and put records into a [`StrikeTable`].
///
/// Each record is projected onto the canonical field subset, then the two
/// sides are merged on strike price: a strike present on only one side gets
/// a zero-filled [`Quote`] for the other. Quantities are cast to
/// non-negative 64-bit integers (stray negative wire values clamp to zero),
/// percentage/IV fields are rounded to 1 decimal, and strike/last price stay
/// unrounded floats.
///
/// Row order is a pure function of the strike values present — independent
/// of input ordering and of which side contributed more rows.
///
/// Fails with [`NseError::EmptyStrikeSet`] when the join yields zero rows.
pub fn build_strike_table(selection: &ExpirySelection<'_>) -> Result<StrikeTable> {
    let mut merged: BTreeMap<i64, StrikeRow> = BTreeMap::new();

    for call in &selection.calls {
        merged
            .entry(strike_key(call.strike_price))
            .or_insert_with(|| blank_row(call.strike_price))
            .call = project(call);
    }
    for put in &selection.puts {
        merged
            .entry(strike_key(put.strike_price))
            .or_insert_with(|| blank_row(put.strike_price))
            .put = project(put);
    }

    if merged.is_empty() {
        return Err(NseError::EmptyStrikeSet);
    }

    Ok(StrikeTable {
        expiry: selection.expiry.clone(),
        timestamp: selection.timestamp.clone(),
        underlying_value: selection.underlying_value,
        rows: merged.into_values().collect(),
    })
}

/// Strike price in paise. The merge keys on integers so that equal strikes
/// collide exactly and the `BTreeMap` order is total; NSE strikes are
/// multiples of 0.5, so paise lose nothing.
fn strike_key(strike: f64) -> i64 {
    (strike * 100.0).round() as i64
}

fn blank_row(strike: f64) -> StrikeRow {
    StrikeRow {
        strike,
        ..StrikeRow::default()
    }
}

/// Project a raw wire record onto the canonical field subset.
fn project(raw: &RawQuote) -> Quote {
    Quote {
        strike_price: raw.strike_price,
        total_buy_quantity: cast_quantity(raw.total_buy_quantity),
        total_sell_quantity: cast_quantity(raw.total_sell_quantity),
        total_traded_volume: cast_quantity(raw.total_traded_volume),
        open_interest: cast_quantity(raw.open_interest),
        percent_change_open_interest: round1(raw.pchange_in_open_interest),
        percent_change_last_price: round1(raw.p_change),
        implied_volatility: round1(raw.implied_volatility),
        last_price: raw.last_price,
    }
}

/// Quantities are non-negative integers; negative or NaN wire values clamp
/// to zero.
fn cast_quantity(value: f64) -> u64 {
    value.max(0.0) as u64
}
