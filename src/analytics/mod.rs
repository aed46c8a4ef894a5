//! Option-chain analytics — from raw snapshot to sentiment summary.
//!
//! The pipeline is a fixed sequence of pure stages; each consumes the
//! previous stage's output and no stage touches the network:
//!
//! | Module | Stage | Description |
//! |---|---|---|
//! | [`expiry`] | 1 | Pick an expiry, split records into call/put sides |
//! | [`table`] | 2 | Outer-join the sides into a strike-ordered table |
//! | [`ratios`] | 3 | Put/call ratios over open interest and volume |
//! | [`max_pain`] | 4 | Writer-pain scan, fills the pain columns |
//! | [`window`] | 5 | ATM location and the display window around it |
//! | [`annotate`] | 6 | Data-only heat gradients and flags per row |
//!
//! [`analyze`] runs the whole sequence:
//!
//! ```no_run
//! use nse_options_rs::NseClient;
//! use nse_options_rs::analytics::analyze;
//! use nse_options_rs::types::option_chain::UnderlyingKind;
//!
//! # #[tokio::main]
//! # async fn main() -> nse_options_rs::Result<()> {
//! let client = NseClient::new();
//! let snapshot = client.get_option_chain(UnderlyingKind::Indices, "NIFTY").await?;
//! let analysis = analyze(&snapshot, None)?;
//! println!("max pain {}", analysis.summary.max_pain_strike);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::option_chain::OptionChainSnapshot;

pub mod annotate;
pub mod expiry;
pub mod max_pain;
pub mod ratios;
pub mod table;
pub mod window;

use annotate::{annotate_window, RowAnnotations};
use expiry::select_expiry;
use max_pain::compute_max_pain;
use ratios::put_call_ratios;
use table::{build_strike_table, StrikeTable};
use window::{atm_window, locate_atm, WindowView};

// ---------------------------------------------------------------------------
// Pipeline output
// ---------------------------------------------------------------------------

/// Headline sentiment numbers for one expiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSummary {
    /// Put/call ratio over open interest, 1 decimal.
    pub pcr_open_interest: f64,
    /// Put/call ratio over traded volume, 1 decimal.
    pub pcr_volume: f64,
    /// Settlement strike minimising aggregate writer payoff.
    pub max_pain_strike: f64,
    /// Table index of the strike closest to spot.
    pub atm_index: usize,
    /// Highest table index whose calls are in the money; `-1` when none.
    pub itm_call_boundary: i64,
    /// Lowest table index whose puts are in the money; `rows.len()` when
    /// none.
    pub itm_put_boundary: i64,
}

/// Everything [`analyze`] produces for one (symbol, expiry) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAnalysis {
    /// Full strike table with pain columns filled.
    pub table: StrikeTable,
    /// Headline numbers.
    pub summary: ChainSummary,
    /// Display window centred on the ATM strike.
    pub window: WindowView,
    /// One annotation record per window row.
    pub annotations: Vec<RowAnnotations>,
}

// ---------------------------------------------------------------------------
// Pipeline driver
// ---------------------------------------------------------------------------

/// Run the full analytics pipeline over a raw snapshot.
///
/// `expiry` selects which expiry to analyse (matched case-insensitively
/// against the record labels); `None` falls back to the nearest expiry the
/// exchange pre-filtered. Any stage error aborts the run.
pub fn analyze(snapshot: &OptionChainSnapshot, expiry: Option<&str>) -> Result<ChainAnalysis> {
    let selection = select_expiry(snapshot, expiry)?;
    let mut table = build_strike_table(&selection)?;

    let ratios = put_call_ratios(&table)?;
    let max_pain_strike = compute_max_pain(&mut table)?;
    let location = locate_atm(&table)?;
    let window = atm_window(&table, location.atm_index);
    let annotations = annotate_window(&window, &location, max_pain_strike);

    Ok(ChainAnalysis {
        summary: ChainSummary {
            pcr_open_interest: ratios.open_interest,
            pcr_volume: ratios.volume,
            max_pain_strike,
            atm_index: location.atm_index,
            itm_call_boundary: location.itm_call_boundary,
            itm_put_boundary: location.itm_put_boundary,
        },
        table,
        window,
        annotations,
    })
}

/// Round to 1 decimal place, the precision every derived ratio and
/// percentage is reported at.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
