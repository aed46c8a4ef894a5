//! Data-only display annotations over a window view.
//!
//! Everything here is plain data — gradient fractions and boolean flags a
//! renderer can map to colours however it likes. No terminal escapes, no
//! colour names.

use serde::{Deserialize, Serialize};

use crate::analytics::window::{AtmLocation, WindowView};

/// Annotations for one side (call or put) of one windowed row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideAnnotations {
    /// Open interest relative to the window maximum, in `[0.0, 1.0]`.
    pub oi_heat: f64,
    /// Traded volume relative to the window maximum, in `[0.0, 1.0]`.
    pub volume_heat: f64,
    /// Open interest fell since the previous session.
    pub oi_change_negative: bool,
    /// Last price fell since the previous session.
    pub price_change_negative: bool,
    /// More quantity on offer than bid.
    pub sell_over_buy: bool,
    /// The side is in the money at this strike.
    pub in_the_money: bool,
}

/// Annotations for one windowed row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAnnotations {
    pub call: SideAnnotations,
    pub put: SideAnnotations,
    /// This row's strike is the max-pain strike.
    pub max_pain: bool,
}

/// Annotate every row of a window.
///
/// Heat gradients are normalised against the maxima *within the window*,
/// not the whole table; a window whose maximum is zero gets all-zero heat
/// rather than a division by zero. ITM flags come from comparing each
/// row's table-global index against the boundaries in `location`.
pub fn annotate_window(
    window: &WindowView,
    location: &AtmLocation,
    max_pain_strike: f64,
) -> Vec<RowAnnotations> {
    let max_call_oi = window.rows.iter().map(|r| r.call.open_interest).max().unwrap_or(0);
    let max_put_oi = window.rows.iter().map(|r| r.put.open_interest).max().unwrap_or(0);
    let max_call_volume = window
        .rows
        .iter()
        .map(|r| r.call.total_traded_volume)
        .max()
        .unwrap_or(0);
    let max_put_volume = window
        .rows
        .iter()
        .map(|r| r.put.total_traded_volume)
        .max()
        .unwrap_or(0);

    window
        .rows
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let index = (window.start + offset) as i64;
            RowAnnotations {
                call: SideAnnotations {
                    oi_heat: heat(row.call.open_interest, max_call_oi),
                    volume_heat: heat(row.call.total_traded_volume, max_call_volume),
                    oi_change_negative: row.call.percent_change_open_interest < 0.0,
                    price_change_negative: row.call.percent_change_last_price < 0.0,
                    sell_over_buy: row.call.total_sell_quantity > row.call.total_buy_quantity,
                    in_the_money: index <= location.itm_call_boundary,
                },
                put: SideAnnotations {
                    oi_heat: heat(row.put.open_interest, max_put_oi),
                    volume_heat: heat(row.put.total_traded_volume, max_put_volume),
                    oi_change_negative: row.put.percent_change_open_interest < 0.0,
                    price_change_negative: row.put.percent_change_last_price < 0.0,
                    sell_over_buy: row.put.total_sell_quantity > row.put.total_buy_quantity,
                    in_the_money: index >= location.itm_put_boundary,
                },
                max_pain: row.strike == max_pain_strike,
            }
        })
        .collect()
}

/// Fraction of the window maximum, `0.0` when the maximum itself is zero.
fn heat(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    }
}
