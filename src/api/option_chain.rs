//! Option-chain endpoint — raw snapshots for index and equity underlyings.

use url::Url;

use crate::client::NseClient;
use crate::error::Result;
use crate::types::option_chain::{OptionChainSnapshot, UnderlyingKind};

impl NseClient {
    /// Retrieve the raw option-chain snapshot for an underlying.
    ///
    /// Returns every listed expiry; slicing one expiry out of the snapshot
    /// and deriving analytics from it is the job of
    /// [`analyze`](crate::analytics::analyze).
    ///
    /// The symbol is percent-encoded, so names like `M&M` pass through
    /// unchanged.
    ///
    /// **Endpoint:** `GET /api/option-chain-indices?symbol=…` /
    /// `GET /api/option-chain-equities?symbol=…`
    pub async fn get_option_chain(
        &self,
        underlying: UnderlyingKind,
        symbol: &str,
    ) -> Result<OptionChainSnapshot> {
        let url = Url::parse_with_params(
            &format!("{}{}", self.base_url(), underlying.path()),
            [("symbol", symbol)],
        )?;
        self.get_url(url).await
    }

    /// Retrieve the option chain for an index underlying (`NIFTY`,
    /// `BANKNIFTY`, …).
    ///
    /// **Endpoint:** `GET /api/option-chain-indices?symbol=…`
    pub async fn get_index_option_chain(&self, symbol: &str) -> Result<OptionChainSnapshot> {
        self.get_option_chain(UnderlyingKind::Indices, symbol).await
    }

    /// Retrieve the option chain for a single-stock underlying (`RELIANCE`,
    /// `TCS`, …).
    ///
    /// **Endpoint:** `GET /api/option-chain-equities?symbol=…`
    pub async fn get_equity_option_chain(&self, symbol: &str) -> Result<OptionChainSnapshot> {
        self.get_option_chain(UnderlyingKind::Equities, symbol).await
    }
}
