//! Wire types for the NSE India public endpoints.
//!
//! This module contains the strongly-typed structs used for deserializing
//! responses from each endpoint the crate talks to.
//!
//! ## Organization
//!
//! - [`option_chain`] — the raw option-chain snapshot (records/filtered
//!   containers, per-strike entries with optional `CE`/`PE` quotes)
//! - [`market_status`] — per-segment open/closed state
//!
//! These mirror the payloads as served; the canonical, analysis-ready model
//! lives in [`crate::analytics`].

pub mod market_status;
pub mod option_chain;
