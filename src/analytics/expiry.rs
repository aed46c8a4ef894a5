//! Expiry selection — slicing one expiry's call and put records out of a
//! raw snapshot.

use chrono::NaiveDate;

use crate::constants::EXPIRY_DATE_FORMAT;
use crate::error::{NseError, Result};
use crate::types::option_chain::{OptionChainSnapshot, RawQuote};

/// One expiry's worth of raw records, sliced out of a snapshot.
///
/// Borrows from the snapshot; [`build_strike_table`] turns the borrowed
/// records into owned canonical rows.
///
/// [`build_strike_table`]: crate::analytics::table::build_strike_table
#[derive(Debug)]
pub struct ExpirySelection<'a> {
    /// Call-side records for the effective expiry.
    pub calls: Vec<&'a RawQuote>,
    /// Put-side records for the effective expiry.
    pub puts: Vec<&'a RawQuote>,
    /// The expiry the filter actually used.
    pub expiry: String,
    /// Quote timestamp echoed from the snapshot.
    pub timestamp: String,
    /// Spot value of the underlying echoed from the snapshot.
    pub underlying_value: f64,
}

/// Select the call/put records for one expiry.
///
/// With `expiry` given, entries whose label matches case-insensitively are
/// kept and the label is echoed back as the effective expiry. With `expiry`
/// omitted, the effective expiry is taken from the first entry of the
/// snapshot's nearest-expiry view, then the same filter runs over the full
/// records list.
///
/// Fails with [`NseError::MalformedSnapshot`] when the snapshot lacks the
/// container the chosen path reads, and with [`NseError::NoMatchingExpiry`]
/// when the filter leaves either side empty.
pub fn select_expiry<'a>(
    snapshot: &'a OptionChainSnapshot,
    expiry: Option<&str>,
) -> Result<ExpirySelection<'a>> {
    let records = snapshot
        .records
        .as_ref()
        .ok_or(NseError::MalformedSnapshot("records"))?;

    let effective = match expiry {
        Some(label) => label.to_owned(),
        None => snapshot
            .filtered
            .as_ref()
            .and_then(|filtered| filtered.data.first())
            .map(|entry| entry.expiry_date.clone())
            .ok_or(NseError::MalformedSnapshot("filtered"))?,
    };

    let mut calls = Vec::new();
    let mut puts = Vec::new();
    for entry in &records.data {
        if !entry.expiry_date.eq_ignore_ascii_case(&effective) {
            continue;
        }
        if let Some(call) = &entry.ce {
            calls.push(call);
        }
        if let Some(put) = &entry.pe {
            puts.push(put);
        }
    }

    if calls.is_empty() {
        return Err(NseError::NoMatchingExpiry {
            expiry: effective,
            side: "call",
        });
    }
    if puts.is_empty() {
        return Err(NseError::NoMatchingExpiry {
            expiry: effective,
            side: "put",
        });
    }

    Ok(ExpirySelection {
        calls,
        puts,
        expiry: effective,
        timestamp: records.timestamp.clone(),
        underlying_value: records.underlying_value,
    })
}

/// Parse an NSE expiry label (`28-Aug-2025`) into a date.
pub fn parse_expiry_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, EXPIRY_DATE_FORMAT).ok()
}

/// Calendar days from `today` to the labelled expiry (negative once past).
///
/// `None` when the label does not parse.
pub fn days_to_expiry(label: &str, today: NaiveDate) -> Option<i64> {
    parse_expiry_label(label).map(|date| (date - today).num_days())
}
