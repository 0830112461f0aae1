// End-to-end auto-configure flow against a mock device:
// discovery -> system info update -> catalog update -> command dispatch.

use std::net::Ipv4Addr;
use std::time::Duration;

use serde_json::json;
use tokio::net::UdpSocket;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bravia_core::{CommandCatalog, DeviceSession, Discovery, SendOutcome, SystemInfoCache};

const POWER_CODE: &str = "AAAAAQAAAAEAAAAVAw==";

/// Loopback SSDP responder advertising the mock device's address.
async fn loopback_responder() -> Discovery {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind loopback responder");
    let target = socket.local_addr().expect("responder has a local addr");

    tokio::spawn(async move {
        let mut buf = [0u8; 1024];
        if let Ok((_, peer)) = socket.recv_from(&mut buf).await {
            let reply = "HTTP/1.1 200 OK\r\n\
                         LOCATION: http://127.0.0.1:52323/dmr.xml\r\n\
                         ST: urn:schemas-sony-com:service:ScalarWebAPI:1\r\n\r\n";
            let _ = socket.send_to(reply.as_bytes(), peer).await;
        }
    });

    Discovery {
        target,
        timeout: Duration::from_secs(2),
    }
}

/// Mount the two info API methods on the mock device.
async fn mount_info_api(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sony/system"))
        .and(body_partial_json(json!({ "method": "getSystemInformation" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "product": "TV", "model": "KDL-50W800B", "serial": "1234567" }],
            "id": 1,
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sony/system"))
        .and(body_partial_json(json!({ "method": "getRemoteControllerInfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "bank": 0 },
                [
                    { "name": "Power", "value": POWER_CODE },
                    { "name": "VolumeUp", "value": "AAAAAQAAAAEAAAASAw==" },
                    { "name": "VolumeDown", "value": "AAAAAQAAAAEAAAATAw==" },
                ]
            ],
            "id": 1,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn auto_configure_then_send_power() {
    let server = MockServer::start().await;
    mount_info_api(&server).await;

    Mock::given(method("POST"))
        .and(path("/sony/IRCC"))
        .and(body_string_contains(POWER_CODE))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // Discovery resolves the device address...
    let discovery = loopback_responder().await;
    let addr = discovery.probe().await.expect("responder answers");
    assert_eq!(addr, Ipv4Addr::LOCALHOST);

    // ...which becomes the session target (mock device port).
    let mut session = DeviceSession::new();
    session.set_target(addr, server.address().port());

    // System info update resolves the model.
    let mut sysinfo = SystemInfoCache::default();
    let model = sysinfo.update(&session).await.expect("info update succeeds");
    assert_eq!(model, "KDL-50W800B");

    // Catalog update populates a non-empty mapping.
    let mut catalog = CommandCatalog::default();
    let count = catalog.update(&session).await.expect("catalog update succeeds");
    assert_eq!(count, 3);
    assert!(!catalog.is_empty());

    // Dispatch issues exactly one POST to /sony/IRCC (checked by the
    // mock's expect(1) on drop) with the code mapped from "power".
    let outcome = session.send_command(&catalog, "power").await;
    assert!(matches!(outcome, SendOutcome::Sent));
}

#[tokio::test]
async fn unknown_command_never_touches_the_network() {
    let server = MockServer::start().await;
    mount_info_api(&server).await;

    let mut session = DeviceSession::new();
    session.set_target(Ipv4Addr::LOCALHOST, server.address().port());

    let mut catalog = CommandCatalog::default();
    catalog.update(&session).await.expect("catalog update succeeds");

    let requests_before = server
        .received_requests()
        .await
        .expect("request recording is on")
        .len();

    let outcome = session.send_command(&catalog, "notacommand").await;
    assert!(matches!(outcome, SendOutcome::NotInCatalog));

    let requests_after = server
        .received_requests()
        .await
        .expect("request recording is on")
        .len();
    assert_eq!(requests_before, requests_after);
}
