// Device session: authentication secret plus resolved target address.
//
// One session exists per console run; it is the only owner of the PSK
// and the address, and every authenticated request goes through it.
// Clients are built fresh per operation from the current state, so a
// `set option` change takes effect on the next request.

use std::net::Ipv4Addr;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use bravia_api::client::DeviceClient;
use bravia_api::error::Error as ApiError;
use bravia_api::models::{RemoteCommand, SystemInformation};
use bravia_api::transport::TransportConfig;

use crate::catalog::CommandCatalog;
use crate::error::CoreError;

/// Factory default PSK on Bravia sets.
pub const DEFAULT_PSK: &str = "0000";

/// The TV serves both APIs on port 80.
pub const DEVICE_PORT: u16 = 80;

/// A resolved device endpoint.
///
/// `port` is almost always [`DEVICE_PORT`]; the field exists so a rig
/// behind a forwarded port can still be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub addr: Ipv4Addr,
    pub port: u16,
}

/// Result of dispatching a remote-control command by name.
///
/// A failed send still counts as a recognized command: only
/// `NotInCatalog` sends the operator down the "unknown command" path.
/// The TV accepts a code and may still fail to act on it, and the
/// console treats that as a reportable error, not an unknown name.
#[derive(Debug)]
pub enum SendOutcome {
    /// The name (case-normalized) is not a catalog key. No network
    /// activity took place.
    NotInCatalog,
    /// The IRCC code was accepted by the device.
    Sent,
    /// The name was recognized but the send failed.
    Failed(CoreError),
}

/// Mutable session state for one console run.
pub struct DeviceSession {
    psk: SecretString,
    target: Option<Target>,
    transport: TransportConfig,
}

impl Default for DeviceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSession {
    /// Fresh session: factory default PSK, no address yet.
    pub fn new() -> Self {
        Self {
            psk: SecretString::from(DEFAULT_PSK),
            target: None,
            transport: TransportConfig::default(),
        }
    }

    // ── State accessors / mutators ───────────────────────────────────

    pub fn psk(&self) -> &SecretString {
        &self.psk
    }

    pub fn set_psk(&mut self, psk: impl Into<String>) {
        self.psk = SecretString::from(psk.into());
    }

    /// The resolved device address, if any.
    pub fn addr(&self) -> Option<Ipv4Addr> {
        self.target.map(|t| t.addr)
    }

    /// Point the session at a TV on the standard port.
    pub fn set_addr(&mut self, addr: Ipv4Addr) {
        self.set_target(addr, DEVICE_PORT);
    }

    /// Point the session at an explicit address and port.
    pub fn set_target(&mut self, addr: Ipv4Addr, port: u16) {
        debug!(%addr, port, "session target set");
        self.target = Some(Target { addr, port });
    }

    // ── Authenticated operations ─────────────────────────────────────

    /// Fetch the device's system information.
    pub async fn system_information(&self) -> Result<SystemInformation, CoreError> {
        let client = self.client()?;
        client.system_information().await.map_err(|e| self.lift(e))
    }

    /// Fetch the device's remote-control command descriptors.
    pub async fn remote_controller_info(&self) -> Result<Vec<RemoteCommand>, CoreError> {
        let client = self.client()?;
        client
            .remote_controller_info()
            .await
            .map_err(|e| self.lift(e))
    }

    /// Dispatch a remote-control command by name.
    ///
    /// The catalog lookup comes first: an unknown name returns
    /// `NotInCatalog` before any other check, including the address
    /// precondition.
    pub async fn send_command(&self, catalog: &CommandCatalog, name: &str) -> SendOutcome {
        let Some(code) = catalog.code(name) else {
            return SendOutcome::NotInCatalog;
        };

        let client = match self.client() {
            Ok(client) => client,
            Err(err) => return SendOutcome::Failed(err),
        };

        match client.send_ircc(code).await {
            Ok(()) => SendOutcome::Sent,
            Err(err) => SendOutcome::Failed(self.lift(err)),
        }
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Build a client for the current target, enforcing the address
    /// precondition.
    fn client(&self) -> Result<DeviceClient, CoreError> {
        let target = self.target.ok_or(CoreError::NoAddress)?;
        DeviceClient::new(target.addr, target.port, self.psk.clone(), &self.transport)
            .map_err(|e| self.lift(e))
    }

    /// Translate a transport-layer error into a `CoreError`, attaching
    /// the configured key to the unauthorized case.
    fn lift(&self, err: ApiError) -> CoreError {
        match err {
            ApiError::Unauthorized => CoreError::Unauthorized {
                psk: self.psk.expose_secret().to_string(),
            },
            ApiError::Deserialization { .. } | ApiError::UnexpectedShape { .. } => {
                CoreError::Decode {
                    message: err.to_string(),
                }
            }
            other => CoreError::Request {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_default_psk_and_no_address() {
        let session = DeviceSession::new();
        assert_eq!(session.psk().expose_secret(), DEFAULT_PSK);
        assert_eq!(session.addr(), None);
    }

    #[test]
    fn set_addr_uses_the_standard_port() {
        let mut session = DeviceSession::new();
        session.set_addr(Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(session.addr(), Some(Ipv4Addr::new(10, 0, 0, 5)));
    }

    #[test]
    fn unauthorized_lift_names_the_configured_key() {
        let mut session = DeviceSession::new();
        session.set_psk("sekrit");
        let err = session.lift(ApiError::Unauthorized);
        assert!(err.to_string().contains("sekrit"));
    }

    #[tokio::test]
    async fn operations_without_an_address_fail_the_precondition() {
        let session = DeviceSession::new();
        let err = session
            .system_information()
            .await
            .expect_err("no address configured");
        assert!(matches!(err, CoreError::NoAddress));
    }
}
