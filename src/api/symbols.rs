//! Symbol discovery — which equity underlyings have derivative contracts.

use crate::client::NseClient;
use crate::constants::MASTER_QUOTE_PATH;
use crate::error::Result;

impl NseClient {
    /// Retrieve the equity underlyings listed for derivatives trading.
    ///
    /// The endpoint serves a plain JSON array of symbols. Index underlyings
    /// are not part of this list; see
    /// [`INDEX_SYMBOLS`](crate::constants::INDEX_SYMBOLS).
    ///
    /// **Endpoint:** `GET /api/master-quote`
    pub async fn get_stock_symbols(&self) -> Result<Vec<String>> {
        self.get(MASTER_QUOTE_PATH).await
    }
}
