// ── Core error types ──
//
// User-facing errors from bravia-core. Consumers never see HTTP status
// codes or JSON parse failures directly; `DeviceSession` translates
// transport-layer errors into these variants, attaching the configured
// key to `Unauthorized` so remediation text can name it verbatim.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No device address is configured yet. A precondition failure,
    /// never a transport error.
    #[error("No device address configured")]
    NoAddress,

    /// The TV rejected the configured pre-shared key (HTTP 403).
    #[error("Unauthorized: the TV rejected the pre-shared key {psk}")]
    Unauthorized { psk: String },

    /// Transport-level failure: timeout, connection refused, non-403
    /// error status.
    #[error("Request failed: {message}")]
    Request { message: String },

    /// The device answered but the payload could not be decoded.
    #[error("Could not decode device response: {message}")]
    Decode { message: String },
}

impl CoreError {
    /// Returns `true` if this failure means the PSK needs fixing.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
