//! # nse-options-rs
//!
//! A Rust client and analytics library for the [NSE India](https://www.nseindia.com)
//! public option-chain endpoints: fetch a raw snapshot, then distil it into
//! put/call ratios, the max-pain strike, and an annotated window around the
//! at-the-money strike.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nse_options_rs::{analyze, NseClient};
//! use nse_options_rs::types::option_chain::UnderlyingKind;
//!
//! #[tokio::main]
//! async fn main() -> nse_options_rs::Result<()> {
//!     let client = NseClient::new();
//!     let snapshot = client.get_option_chain(UnderlyingKind::Indices, "NIFTY").await?;
//!     let analysis = analyze(&snapshot, None)?;
//!     println!(
//!         "PCR(OI) {}  max pain {}",
//!         analysis.summary.pcr_open_interest, analysis.summary.max_pain_strike,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! The analytics stages in [`analytics`] are pure functions over the fetched
//! snapshot, so they can be driven from recorded payloads without a client.

pub mod analytics;
pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the pipeline driver and its output types at crate root.
pub use analytics::{analyze, ChainAnalysis, ChainSummary};
/// Re-export the main client type at crate root for convenience.
pub use client::NseClient;
/// Re-export the error type and Result alias.
pub use error::{NseError, Result};
