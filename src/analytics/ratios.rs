//! Put/call ratios over one expiry's strike table.

use serde::{Deserialize, Serialize};

use crate::analytics::round1;
use crate::analytics::table::StrikeTable;
use crate::error::{NseError, Result};

/// Put/call sentiment ratios for one expiry.
///
/// Both ratios are `put total / call total`, rounded to 1 decimal. Above 1.0
/// puts outweigh calls (bearish positioning), below 1.0 the reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutCallRatios {
    /// Σ put open interest / Σ call open interest.
    pub open_interest: f64,
    /// Σ put traded volume / Σ call traded volume.
    pub volume: f64,
}

/// Compute open-interest and volume put/call ratios over the whole table.
///
/// Fails with [`NseError::InsufficientData`] when either call-side sum is
/// zero — a zero denominator means the ratio is undefined, not infinite.
pub fn put_call_ratios(table: &StrikeTable) -> Result<PutCallRatios> {
    let mut call_oi: u64 = 0;
    let mut put_oi: u64 = 0;
    let mut call_volume: u64 = 0;
    let mut put_volume: u64 = 0;

    for row in &table.rows {
        call_oi += row.call.open_interest;
        put_oi += row.put.open_interest;
        call_volume += row.call.total_traded_volume;
        put_volume += row.put.total_traded_volume;
    }

    if call_oi == 0 {
        return Err(NseError::InsufficientData("put/call ratio (open interest)"));
    }
    if call_volume == 0 {
        return Err(NseError::InsufficientData("put/call ratio (volume)"));
    }

    Ok(PutCallRatios {
        open_interest: round1(put_oi as f64 / call_oi as f64),
        volume: round1(put_volume as f64 / call_volume as f64),
    })
}
