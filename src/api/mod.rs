//! Endpoint implementations for the NSE India public API.
//!
//! Each sub-module adds high-level `async` methods to
//! [`NseClient`](crate::client::NseClient) via `impl` blocks. All methods
//! handle session seeding, HTTP transport, and error mapping automatically.
//!
//! ## Usage
//!
//! Import the client and call methods on it:
//!
//! ```no_run
//! use nse_options_rs::NseClient;
//! use nse_options_rs::types::option_chain::UnderlyingKind;
//!
//! # #[tokio::main]
//! # async fn main() -> nse_options_rs::Result<()> {
//! let client = NseClient::new();
//! let open = client.is_market_open().await?;
//! let chain = client.get_option_chain(UnderlyingKind::Indices, "NIFTY").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`option_chain`] | 2 | Raw option-chain snapshots (indices & equities) |
//! | [`market_status`] | 1 | Per-segment open/closed state |
//! | [`symbols`] | 1 | F&O equity underlying discovery |

pub mod market_status;
pub mod option_chain;
pub mod symbols;
