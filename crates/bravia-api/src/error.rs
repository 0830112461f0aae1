use thiserror::Error;

/// Top-level error type for the `bravia-api` crate.
///
/// Covers every failure mode across the three protocol surfaces:
/// SSDP discovery, the system info API, and the IRCC control API.
/// `bravia-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The TV rejected the pre-shared key (HTTP 403).
    #[error("Unauthorized: the TV rejected the pre-shared key")]
    Unauthorized,

    // ── Transport ───────────────────────────────────────────────────
    /// Non-success HTTP status other than 403.
    #[error("Device returned HTTP {status}")]
    Status { status: u16 },

    /// HTTP transport error (connection refused, timeout, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Socket error during discovery.
    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),

    // ── Discovery ───────────────────────────────────────────────────
    /// No reply to the discovery probe within the receive window.
    #[error("No reply to the discovery probe")]
    DiscoveryTimeout,

    /// A reply arrived but contained no parseable IPv4 address.
    #[error("Discovery reply contained no parseable address")]
    DiscoveryDecode,

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The response parsed as JSON but did not match the expected
    /// per-method shape (missing `result` element, wrong element type).
    #[error("Unexpected response shape: {message}")]
    UnexpectedShape { message: String },
}

impl Error {
    /// Returns `true` if this error means the configured PSK was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns `true` if this is a decode-level failure (the device
    /// answered, but we could not make sense of the payload).
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Deserialization { .. } | Self::UnexpectedShape { .. } | Self::DiscoveryDecode
        )
    }
}
