// bravia-api: Wire-level client for Sony Bravia TVs.
//
// Covers the three protocol surfaces the TV exposes on the LAN:
// SSDP discovery, the JSON-RPC system info API, and the SOAP/IRCC
// remote-control API. No console state lives here -- `bravia-core`
// layers the session and caches on top.

pub mod client;
pub mod discovery;
pub mod error;
pub mod models;
pub mod transport;

pub use client::DeviceClient;
pub use discovery::{Discovery, extract_ipv4};
pub use error::Error;
pub use models::{RemoteCommand, SystemInformation};
pub use transport::TransportConfig;
