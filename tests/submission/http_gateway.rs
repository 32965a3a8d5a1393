use std::{net::TcpListener, time::Duration};

use order_form::{
    catalog::Catalog,
    submission::{
        HttpSubmissionGateway, SubmissionConfig, SubmissionErrorKind, SubmissionGateway, deliver,
    },
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

use crate::payload_for;

fn gateway_for(endpoint: String, timeout_ms: u64) -> HttpSubmissionGateway {
    HttpSubmissionGateway::new(&SubmissionConfig {
        endpoint,
        timeout_ms,
    })
    .expect("gateway should build")
}

#[tokio::test]
async fn posts_payload_as_json_and_reports_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/orders"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "projectInfo": {"name": "Not provided"},
            "selectedFeatures": [{"id": "12", "comment": null}],
            "summary": {"totalSelectedFeatures": 1, "totalCost": 400}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(format!("{}/webhook/orders", server.uri()), 5_000);
    let payload = payload_for(&Catalog::builtin(), &["12"]);

    assert!(deliver(&gateway, &payload).await);
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/orders"))
        .respond_with(ResponseTemplate::new(503).set_body_string("workflow paused"))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(format!("{}/webhook/orders", server.uri()), 5_000);
    let payload = payload_for(&Catalog::builtin(), &["1"]);

    let err = gateway
        .submit(&payload)
        .await
        .expect_err("503 must be a failure");
    assert_eq!(err.kind, SubmissionErrorKind::HttpStatus);
    assert_eq!(err.http_status, Some(503));
    assert!(err.message.contains("workflow paused"));
}

#[tokio::test]
async fn deliver_returns_false_on_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gateway = gateway_for(format!("{}/missing", server.uri()), 5_000);
    assert!(!deliver(&gateway, &payload_for(&Catalog::builtin(), &["2"])).await);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(800)))
        .mount(&server)
        .await;

    let gateway = gateway_for(server.uri(), 50);
    let err = gateway
        .submit(&payload_for(&Catalog::builtin(), &["3"]))
        .await
        .expect_err("slow response must time out");
    assert_eq!(err.kind, SubmissionErrorKind::Timeout);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    let endpoint = format!(
        "http://{}/webhook",
        listener.local_addr().expect("listener has an address")
    );
    drop(listener);

    let gateway = gateway_for(endpoint, 2_000);
    let payload = payload_for(&Catalog::builtin(), &["3"]);
    let err = gateway
        .submit(&payload)
        .await
        .expect_err("closed port must fail");
    assert_eq!(err.kind, SubmissionErrorKind::Transport);
    assert!(!deliver(&gateway, &payload).await);
}

#[test]
fn invalid_endpoints_are_rejected_at_construction() {
    for endpoint in ["", "not a url", "ftp://collector.example.com/hook"] {
        let err = match HttpSubmissionGateway::new(&SubmissionConfig {
            endpoint: endpoint.to_string(),
            timeout_ms: 1_000,
        }) {
            Ok(_) => panic!("endpoint '{endpoint}' should be rejected"),
            Err(err) => err,
        };
        assert_eq!(err.kind, SubmissionErrorKind::InvalidConfig);
    }
}
