//! Market-status endpoint — is the market open right now.

use crate::client::NseClient;
use crate::constants::{BENCHMARK_INDEX, MARKET_STATUS_PATH};
use crate::error::{NseError, Result};
use crate::types::market_status::MarketStatusResponse;

impl NseClient {
    /// Retrieve the open/closed state of every market segment.
    ///
    /// **Endpoint:** `GET /api/marketStatus`
    pub async fn get_market_status(&self) -> Result<MarketStatusResponse> {
        self.get(MARKET_STATUS_PATH).await
    }

    /// True while the capital-market segment is trading.
    ///
    /// Reads the segment entry carrying the [`BENCHMARK_INDEX`]; a payload
    /// without that entry is an error rather than a silent "closed".
    pub async fn is_market_open(&self) -> Result<bool> {
        let status = self.get_market_status().await?;
        status
            .market_state
            .iter()
            .find(|state| state.index == BENCHMARK_INDEX)
            .map(|state| state.is_open())
            .ok_or_else(|| {
                NseError::UnexpectedPayload(format!(
                    "market state has no `{BENCHMARK_INDEX}` entry"
                ))
            })
    }
}
