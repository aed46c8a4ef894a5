//! Error types for the `nse-options-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, NseError>`.
//!
//! [`NseError`] covers:
//! - **Snapshot shape errors** — a payload missing the containers the pipeline reads
//! - **Expiry selection errors** — a filter that matches no call or no put records
//! - **Analytics errors** — an empty merged strike set, a zero ratio denominator
//! - **HTTP status errors** — unexpected status codes with response body
//! - **HTTP transport errors** — network, TLS, timeout failures
//! - **JSON errors** — deserialization failures
//! - **URL errors** — malformed URL construction
//!
//! The analytics kinds are never swallowed inside a pipeline stage; every
//! stage returns them to the caller, which owns the decision to log, retry
//! (at the fetch layer only), or abort.

/// All possible errors produced by the crate.
#[derive(Debug, thiserror::Error)]
pub enum NseError {
    /// The raw snapshot lacks a container the pipeline needs.
    #[error("malformed snapshot: missing `{0}` container")]
    MalformedSnapshot(&'static str),

    /// The expiry filter left no records on one side of the chain.
    #[error("expiry `{expiry}` matched no {side} records")]
    NoMatchingExpiry {
        /// The effective expiry label the filter used.
        expiry: String,
        /// Which side came up empty (`"call"` or `"put"`).
        side: &'static str,
    },

    /// The call/put outer join produced zero strike rows.
    #[error("strike merge produced an empty table")]
    EmptyStrikeSet,

    /// A ratio denominator summed to zero across the table.
    #[error("insufficient data for {0}: call-side sum is zero")]
    InsufficientData(&'static str),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A payload parsed cleanly but lacked an entry the caller relies on.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NseError>;
