// Device HTTP client for the two control surfaces.
//
// One client object hides the fact that the TV speaks two different
// wire formats: a JSON-RPC-style info API at /sony/system and a
// SOAP/XML control API at /sony/IRCC. Callers see typed results and
// `Error`, never the envelope details.

use std::net::Ipv4Addr;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{InfoEnvelope, InfoRequest, RemoteCommand, SystemInformation};
use crate::transport::TransportConfig;

/// Authentication header carried on every request.
const PSK_HEADER: &str = "X-Auth-PSK";

/// Fixed SOAP action for IRCC dispatch. The surrounding quotes are part
/// of the header value.
const SOAP_ACTION: &str = "\"urn:schemas-sony-com:service:IRCC:1#X_SendIRCC\"";

/// Wrap an IRCC code in the fixed SOAP envelope the control API expects.
fn ircc_envelope(code: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/"><s:Body><u:X_SendIRCC xmlns:u="urn:schemas-sony-com:service:IRCC:1"><IRCCCode>{code}</IRCCCode></u:X_SendIRCC></s:Body></s:Envelope>"#
    )
}

/// HTTP client bound to one resolved TV address.
///
/// Built fresh per operation from the session's current address and
/// key; holds no mutable state of its own.
pub struct DeviceClient {
    http: reqwest::Client,
    base_url: Url,
    psk: SecretString,
}

impl DeviceClient {
    /// Create a client for a TV at `addr:port` (the device serves both
    /// APIs on port 80; other ports exist for test rigs).
    pub fn new(
        addr: Ipv4Addr,
        port: u16,
        psk: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{addr}:{port}"))?;
        Ok(Self {
            http: transport.build_client()?,
            base_url,
            psk,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` and base URL.
    pub fn with_client(http: reqwest::Client, base_url: Url, psk: SecretString) -> Self {
        Self {
            http,
            base_url,
            psk,
        }
    }

    /// The device base URL this client targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Info API (/sony/system) ──────────────────────────────────────

    /// Fetch and decode `getSystemInformation`.
    pub async fn system_information(&self) -> Result<SystemInformation, Error> {
        let result = self.info_request("getSystemInformation").await?;
        SystemInformation::from_result(&result)
    }

    /// Fetch and decode `getRemoteControllerInfo`.
    pub async fn remote_controller_info(&self) -> Result<Vec<RemoteCommand>, Error> {
        let result = self.info_request("getRemoteControllerInfo").await?;
        RemoteCommand::list_from_result(&result)
    }

    /// POST the JSON-RPC envelope for `method` and unwrap the `result`
    /// payload. HTTP 403 is `Error::Unauthorized`; any other non-success
    /// status is `Error::Status`.
    async fn info_request(&self, method: &str) -> Result<serde_json::Value, Error> {
        let url = self.base_url.join("/sony/system")?;
        debug!(%url, method, "sending info request");

        let resp = self
            .http
            .post(url)
            .header(PSK_HEADER, self.psk.expose_secret())
            .json(&InfoRequest::new(method))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let envelope: InfoEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;
        envelope.into_result()
    }

    // ── Control API (/sony/IRCC) ─────────────────────────────────────

    /// Send one IRCC code through the SOAP control API.
    pub async fn send_ircc(&self, code: &str) -> Result<(), Error> {
        let url = self.base_url.join("/sony/IRCC")?;
        debug!(%url, "sending IRCC code");

        let resp = self
            .http
            .post(url)
            .header(PSK_HEADER, self.psk.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=UTF-8")
            .header("SOAPACTION", SOAP_ACTION)
            .body(ircc_envelope(code))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
