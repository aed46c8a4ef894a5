//! ATM location and the display window centred on it.

use serde::{Deserialize, Serialize};

use crate::analytics::table::{StrikeRow, StrikeTable};
use crate::constants::ATM_WINDOW_RADIUS;
use crate::error::{NseError, Result};

/// Where the at-the-money strike sits in the table, plus the in-the-money
/// boundaries it induces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmLocation {
    /// Index of the strike closest to spot. On an exact distance tie the
    /// lower strike wins.
    pub atm_index: usize,
    /// Highest index whose calls are in the money. `-1` when spot sits
    /// below the whole table.
    pub itm_call_boundary: i64,
    /// Lowest index whose puts are in the money. `rows.len()` when spot
    /// sits above the whole table.
    pub itm_put_boundary: i64,
}

/// Find the ATM strike and derive the ITM boundaries.
///
/// Calls with strikes below spot are in the money, puts with strikes above
/// it. A strike exactly at spot counts as in the money on both sides.
/// Fails with [`NseError::EmptyStrikeSet`] on an empty table.
pub fn locate_atm(table: &StrikeTable) -> Result<AtmLocation> {
    let spot = table.underlying_value;
    let (atm_index, atm_row) = table
        .rows
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.strike - spot).abs().total_cmp(&(b.strike - spot).abs())
        })
        .ok_or(NseError::EmptyStrikeSet)?;

    let index = atm_index as i64;
    let (itm_call_boundary, itm_put_boundary) = if atm_row.strike == spot {
        (index, index)
    } else if atm_row.strike > spot {
        (index - 1, index)
    } else {
        (index, index + 1)
    };

    Ok(AtmLocation {
        atm_index,
        itm_call_boundary,
        itm_put_boundary,
    })
}

/// A contiguous slice of strike rows centred on the ATM strike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    /// Index into the source table of `rows[0]`.
    pub start: usize,
    /// Offset of the ATM row within `rows`.
    pub atm_offset: usize,
    /// The windowed rows, cloned out of the table.
    pub rows: Vec<StrikeRow>,
}

impl WindowView {
    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the window has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cut a window of up to [`ATM_WINDOW_RADIUS`] strikes either side of the
/// ATM index.
///
/// Near a table edge the window clips to what exists rather than padding,
/// so it may be asymmetric or shorter than the full `2 × radius + 1`. An
/// out-of-range `atm_index` clamps to the last row; an empty table yields
/// an empty window.
pub fn atm_window(table: &StrikeTable, atm_index: usize) -> WindowView {
    if table.rows.is_empty() {
        return WindowView::default();
    }

    let atm = atm_index.min(table.rows.len() - 1);
    let start = atm.saturating_sub(ATM_WINDOW_RADIUS);
    let end = (atm + ATM_WINDOW_RADIUS).min(table.rows.len() - 1);

    WindowView {
        start,
        atm_offset: atm - start,
        rows: table.rows[start..=end].to_vec(),
    }
}
