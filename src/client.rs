//! Core HTTP client for the NSE India public endpoints.
//!
//! The [`NseClient`] struct is the main entry point for fetching raw
//! snapshots. It wraps [`reqwest::Client`] with the browser-style headers the
//! endpoints expect and manages the cookie session they require: every API
//! call must carry the `nsit`/`nseappid` cookies that only the HTML pages
//! hand out, and those cookies go stale after a few minutes.
//!
//! API endpoint methods are added to `NseClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::{
    ACCEPT_LANGUAGE, BASE_URL, CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, SESSION_SEED_PATH,
    SESSION_TTL_SECS, USER_AGENT,
};
use crate::error::{NseError, Result};

/// HTTP client for the NSE India public endpoints.
///
/// Wraps [`reqwest::Client`] with a cookie store and browser-style default
/// headers, and seeds the session by visiting the option-chain page before
/// the first API call (and again whenever the session goes stale or an API
/// call is rejected). Cloning is cheap; clones share the cookie store and
/// the session clock.
///
/// # Example
///
/// ```no_run
/// use nse_options_rs::client::NseClient;
///
/// # #[tokio::main]
/// # async fn main() -> nse_options_rs::error::Result<()> {
/// let client = NseClient::new();
/// // client.get::<MyResponse>("/api/marketStatus").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NseClient {
    http: reqwest::Client,
    /// Base URL for requests (defaults to [`BASE_URL`]).
    base_url: String,
    /// Referer sent with API calls; without it the API answers 401.
    referer: HeaderValue,
    /// Instant of the last successful session seeding (`None` before the first).
    seeded_at: Arc<Mutex<Option<Instant>>>,
}

impl NseClient {
    /// Create a new `NseClient` against the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a new `NseClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");

        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let referer = HeaderValue::from_str(&format!("{base_url}{SESSION_SEED_PATH}"))
            .expect("base url contains invalid header characters");

        Self {
            http,
            base_url,
            referer,
            seeded_at: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Session handling
    // -----------------------------------------------------------------------

    /// Visit the option-chain page so the server sets fresh session cookies.
    ///
    /// The cookies land in the client's cookie store; only the seeding
    /// instant is tracked here.
    pub async fn seed_session(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, SESSION_SEED_PATH);
        tracing::debug!(%url, "seeding session cookies");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NseError::HttpStatus { status, body });
        }

        *self.lock_seeded_at() = Some(Instant::now());
        Ok(())
    }

    /// Seed the session unless it was seeded within [`SESSION_TTL_SECS`].
    async fn ensure_session(&self) -> Result<()> {
        let fresh = match *self.lock_seeded_at() {
            Some(at) => at.elapsed() < Duration::from_secs(SESSION_TTL_SECS),
            None => false,
        };
        if fresh {
            return Ok(());
        }
        self.seed_session().await
    }

    fn lock_seeded_at(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        self.seeded_at.lock().unwrap_or_else(|e| e.into_inner())
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET against a path (optionally with query) and deserialize
    /// the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = Url::parse(&self.url(path))?;
        self.get_url(url).await
    }

    /// Perform a GET against a fully built URL and deserialize the JSON
    /// response.
    ///
    /// Seeds the session first when stale; a 401/403 answer re-seeds and
    /// retries once before failing.
    pub async fn get_url<R: DeserializeOwned>(&self, url: Url) -> Result<R> {
        self.ensure_session().await?;

        tracing::debug!(%url, "GET");
        let mut resp = self.api_get(url.clone()).await?;

        if matches!(
            resp.status(),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN
        ) {
            tracing::debug!(%url, status = %resp.status(), "session rejected, re-seeding");
            self.seed_session().await?;
            resp = self.api_get(url).await?;
        }

        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    async fn api_get(&self, url: Url) -> Result<reqwest::Response> {
        Ok(self
            .http
            .get(url)
            .header(header::REFERER, self.referer.clone())
            .header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?)
    }

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request, including the seeding page
    /// fetch. `Accept-Encoding` is handled by reqwest's gzip/brotli support.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers
    }

    /// Read a response, returning either the deserialized body or an
    /// [`NseError`].
    ///
    /// Uses `bytes()` + `serde_json::from_slice()` to avoid the overhead of
    /// UTF-8 validation that `text()` + `from_str()` would incur.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(NseError::Json)
        } else {
            Err(NseError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}

impl Default for NseClient {
    fn default() -> Self {
        Self::new()
    }
}
