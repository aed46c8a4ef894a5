//! Constants for the NSE India public endpoints.
//!
//! Contains the base URL, endpoint paths, the browser-style header values
//! the endpoints expect, session parameters, and analytics defaults.
//! These are used internally by [`NseClient`](crate::client::NseClient)
//! and the analytics pipeline, but are also exported for advanced usage.

// ---------------------------------------------------------------------------
// Base URL & endpoint paths
// ---------------------------------------------------------------------------

/// Base URL for the NSE India website and its public JSON API.
pub const BASE_URL: &str = "https://www.nseindia.com";

/// HTML page whose response seeds the `nsit`/`nseappid` session cookies.
pub const SESSION_SEED_PATH: &str = "/option-chain";

/// Option-chain snapshot for index underlyings (`?symbol=NIFTY`).
pub const OPTION_CHAIN_INDICES_PATH: &str = "/api/option-chain-indices";

/// Option-chain snapshot for equity underlyings (`?symbol=RELIANCE`).
pub const OPTION_CHAIN_EQUITIES_PATH: &str = "/api/option-chain-equities";

/// Open/closed state for every market segment.
pub const MARKET_STATUS_PATH: &str = "/api/marketStatus";

/// List of equity underlyings that have derivative contracts.
pub const MASTER_QUOTE_PATH: &str = "/api/master-quote";

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Desktop-browser user agent; the endpoints reject obvious non-browser clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";

/// `Accept-Language` value sent with every request.
pub const ACCEPT_LANGUAGE: &str = "en-IN,en-GB;q=0.9,en-US;q=0.8,en;q=0.7";

// ---------------------------------------------------------------------------
// Session & timeouts
// ---------------------------------------------------------------------------

/// How long seeded session cookies are trusted before re-seeding.
pub const SESSION_TTL_SECS: u64 = 300;

/// TCP connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Whole-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 27;

// ---------------------------------------------------------------------------
// Market & analytics defaults
// ---------------------------------------------------------------------------

/// Benchmark index whose market-state entry answers "is the market open".
pub const BENCHMARK_INDEX: &str = "NIFTY 50";

/// Index underlyings served by the indices option-chain endpoint.
pub const INDEX_SYMBOLS: [&str; 4] = ["NIFTY", "BANKNIFTY", "FINNIFTY", "MIDCPNIFTY"];

/// Rows kept on each side of the at-the-money row in a display window.
pub const ATM_WINDOW_RADIUS: usize = 15;

/// Date format of NSE expiry labels (e.g. `28-Aug-2025`).
pub const EXPIRY_DATE_FORMAT: &str = "%d-%b-%Y";
