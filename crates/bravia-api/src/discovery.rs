// SSDP discovery of Bravia TVs on the local network.
//
// One probe, one reply. The TV advertises the ScalarWebAPI service
// type over SSDP; the reply is only mined for a dotted-quad IPv4
// address (typically inside the LOCATION header), everything else in
// it is ignored.

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tokio::net::UdpSocket;
use tracing::debug;

use crate::error::Error;

/// Well-known SSDP multicast group.
pub const SSDP_ADDR: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);

/// Well-known SSDP port.
pub const SSDP_PORT: u16 = 1900;

/// Service type the Bravia web API advertises.
pub const SERVICE_TYPE: &str = "urn:schemas-sony-com:service:ScalarWebAPI:1";

/// Replies are size-bounded; the TV's SSDP response fits well inside this.
const MAX_REPLY_BYTES: usize = 1000;

static IPV4_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Extract the first valid dotted-quad IPv4 address from free text.
///
/// Candidates are matched with a loose `\d{1,3}` pattern and then
/// validated through `Ipv4Addr::from_str`, so `999.1.1.1` is skipped
/// in favour of a later valid match.
pub fn extract_ipv4(text: &str) -> Option<Ipv4Addr> {
    let pattern = IPV4_PATTERN.get_or_init(|| {
        Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").expect("static pattern is valid")
    });
    pattern
        .find_iter(text)
        .find_map(|m| Ipv4Addr::from_str(m.as_str()).ok())
}

/// Single-shot SSDP prober.
///
/// `target` and `timeout` are configurable so tests can point the probe
/// at a loopback responder; production uses `Default` (the SSDP
/// multicast group, 5 second receive window).
#[derive(Debug, Clone)]
pub struct Discovery {
    pub target: SocketAddr,
    pub timeout: Duration,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            target: SocketAddr::from((SSDP_ADDR, SSDP_PORT)),
            timeout: Duration::from_secs(5),
        }
    }
}

impl Discovery {
    /// Send one M-SEARCH probe and wait for at most one reply.
    ///
    /// Returns the first valid IPv4 address found in the reply text.
    /// No reply within the window is `Error::DiscoveryTimeout`; a reply
    /// without a parseable address is `Error::DiscoveryDecode`.
    pub async fn probe(&self) -> Result<Ipv4Addr, Error> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
        let message = self.probe_message();
        debug!(target = %self.target, "sending discovery probe");
        socket.send_to(message.as_bytes(), self.target).await?;

        let mut buf = [0u8; MAX_REPLY_BYTES];
        let (len, peer) = tokio::time::timeout(self.timeout, socket.recv_from(&mut buf))
            .await
            .map_err(|_| Error::DiscoveryTimeout)??;
        debug!(%peer, len, "discovery reply received");

        let reply = String::from_utf8_lossy(&buf[..len]);
        extract_ipv4(&reply).ok_or(Error::DiscoveryDecode)
    }

    /// The HTTP-over-UDP M-SEARCH request, CRLF line endings and a
    /// trailing blank line included.
    fn probe_message(&self) -> String {
        format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: {}\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 1\r\n\
             ST: {SERVICE_TYPE}\r\n\r\n",
            self.target
        )
    }
}
