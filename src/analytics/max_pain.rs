//! Max-pain scan — the expiry settlement price that minimises aggregate
//! option-writer payoff.

use crate::analytics::table::StrikeTable;
use crate::error::{NseError, Result};

/// Compute the max-pain strike and fill the pain columns of every row.
///
/// For each candidate settlement strike, call pain sums
/// `(candidate − strike) × call OI` over strikes at or below the candidate,
/// and put pain sums `(strike − candidate) × put OI` over strikes at or
/// above it. The candidate's own row appears in both sums and contributes
/// zero to each. The scan is quadratic in the strike count; NSE chains top
/// out at a few hundred strikes, so a table of partial sums is not worth
/// the bookkeeping.
///
/// Returns the strike whose total pain is lowest. Ties resolve to the
/// lowest such strike. Fails with [`NseError::EmptyStrikeSet`] on an empty
/// table.
pub fn compute_max_pain(table: &mut StrikeTable) -> Result<f64> {
    if table.rows.is_empty() {
        return Err(NseError::EmptyStrikeSet);
    }

    let pains: Vec<(f64, f64)> = table
        .rows
        .iter()
        .map(|candidate| {
            let mut call_pain = 0.0;
            let mut put_pain = 0.0;
            for row in &table.rows {
                if row.strike <= candidate.strike {
                    call_pain += (candidate.strike - row.strike) * row.call.open_interest as f64;
                }
                if row.strike >= candidate.strike {
                    put_pain += (row.strike - candidate.strike) * row.put.open_interest as f64;
                }
            }
            (call_pain, put_pain)
        })
        .collect();

    let mut best = 0;
    for (index, (call_pain, put_pain)) in pains.into_iter().enumerate() {
        let total = call_pain + put_pain;
        let row = &mut table.rows[index];
        row.call_pain = call_pain;
        row.put_pain = put_pain;
        row.total_pain = total;
        // Strict `<` keeps the first (lowest) strike on a tie.
        if total < table.rows[best].total_pain {
            best = index;
        }
    }

    Ok(table.rows[best].strike)
}
