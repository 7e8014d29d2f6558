use thiserror::Error;

/// Top-level error type for the `meraki-api` crate.
///
/// Covers every failure mode of a Dashboard API call: client construction,
/// transport, HTTP status, and response decoding. `meraki-core` folds all of
/// these into an "unavailable" outcome; they are kept distinct here so the
/// log line says what actually went wrong.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// API key rejected by the Dashboard (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    /// API key could not be encoded as a header value.
    #[error("Invalid API key header value: {0}")]
    InvalidApiKeyHeader(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying `reqwest::Client` could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Dashboard API ───────────────────────────────────────────────
    /// Non-success status from the Dashboard API.
    ///
    /// `message` comes from the `{"errors": [...]}` body when the API
    /// supplied one, otherwise it is the canonical status text.
    #[error("Dashboard API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// HTTP status associated with this error, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidApiKey => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
