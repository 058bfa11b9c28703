//! Integration tests for the HTTP client against a mock partner API.
//!
//! These tests verify request signing, field injection, retry behavior for
//! throttled and unavailable responses, and error classification.

use std::time::Duration;

use serde_json::{json, Value};
use shopee_api::auth::verify_signature;
use shopee_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use shopee_api::{ApiUrl, PartnerId, PartnerKey, ShopeeConfig};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARTNER_ID: u64 = 845_053;
const PARTNER_KEY: &str = "test-partner-key";

/// Creates a client pointed at the mock server with the given retry budget.
fn create_client(server: &MockServer, retries: u32) -> HttpClient {
    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(PARTNER_ID).unwrap())
        .partner_key(PartnerKey::new(PARTNER_KEY).unwrap())
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .retries(retries)
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn timestamp_of(body: &[u8]) -> i64 {
    let value: Value = serde_json::from_slice(body).unwrap();
    value["timestamp"].as_i64().unwrap()
}

// ============================================================================
// Signing and Headers
// ============================================================================

#[tokio::test]
async fn test_post_injects_auth_fields_and_sends_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/shop/get"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(header_exists("Authorization"))
        .and(header_exists("User-Agent"))
        .and(body_partial_json(json!({
            "shopid": 220_006_999,
            "partner_id": PARTNER_ID
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shop_id": 220_006_999,
            "shop_name": "Demo Shop",
            "request_id": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let response = client
        .post::<Value, _>("/shop/get", &json!({ "shopid": 220_006_999 }))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["shop_name"], "Demo Shop");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(timestamp_of(&requests[0].body) > 0);
}

#[tokio::test]
async fn test_sent_body_verifies_against_prepared_signature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/items/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let request = HttpRequest::builder(HttpMethod::Post, "items/get")
        .json_body(&json!({ "shopid": 1, "pagination_offset": 0 }))
        .build()
        .unwrap();

    let outbound = client.prepare(&request).unwrap();
    let signature = outbound.signature().unwrap().to_string();
    assert!(verify_signature(
        outbound.url.as_str(),
        &outbound.body,
        PARTNER_KEY,
        &signature
    ));

    client.request::<Value>(&request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["partner_id"], PARTNER_ID);
    assert_eq!(sent["pagination_offset"], 0);
    assert_eq!(requests[0].url.as_str(), outbound.url.as_str());
}

#[tokio::test]
async fn test_get_sends_sorted_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/shop/performance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    client
        .get::<Value>("shop/performance", &[("b", "2"), ("a", "1")])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("a=1&b=2"));
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let response = client.post::<Value, _>("ping", &json!({})).await.unwrap();

    assert_eq!(response.body, Value::Null);
}

// ============================================================================
// Retry Behavior
// ============================================================================

#[tokio::test]
async fn test_rate_limited_response_is_retried_with_fresh_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/items/get"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({ "error": "error_rate_limit" })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/items/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = create_client(&server, 3);
    let response = client
        .post::<Value, _>("items/get", &json!({ "shopid": 1 }))
        .await
        .unwrap();

    assert_eq!(response.body, json!({ "items": [] }));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(timestamp_of(&requests[1].body) > timestamp_of(&requests[0].body));
}

#[tokio::test]
async fn test_rate_limit_exhausts_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({ "error": "error_rate_limit", "request_id": "r-1" })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server, 2);
    let result = client.post::<Value, _>("items/get", &json!({})).await;

    match result {
        Err(HttpError::RateLimited(e)) => {
            assert_eq!(e.error.code, 429);
            assert_eq!(e.error.message, "error_rate_limit");
            assert_eq!(e.error.request_id.as_deref(), Some("r-1"));
            assert_eq!(e.retry_after, Duration::ZERO);
        }
        other => panic!("Expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_service_unavailable_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let client = create_client(&server, 2);
    let response = client.post::<Value, _>("shop/get", &json!({})).await.unwrap();

    assert_eq!(response.body["ok"], true);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_service_unavailable_without_retries_fails_after_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let result = client.post::<Value, _>("shop/get", &json!({})).await;

    match result {
        Err(HttpError::Transient(e)) => {
            assert_eq!(e.code, 503);
            assert_eq!(e.to_string(), "Unknown Error");
        }
        other => panic!("Expected Transient, got {other:?}"),
    }
}

// ============================================================================
// Error Classification
// ============================================================================

#[tokio::test]
async fn test_error_envelope_becomes_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "error_param",
            "msg": "shopid is required",
            "request_id": "req-400"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 3);
    let error = client
        .post::<Value, _>("shop/get", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    match error {
        HttpError::Response(e) => {
            assert_eq!(e.to_string(), "error_param");
            assert_eq!(e.request_id.as_deref(), Some("req-400"));
        }
        other => panic!("Expected Response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sub_errors_are_sorted_in_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["stock invalid", "price invalid"]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let error = client
        .post::<Value, _>("items/update_variation_stock", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "price invalid, stock invalid");
}

#[tokio::test]
async fn test_not_acceptable_has_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(406))
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let error = client
        .post::<Value, _>("shop/get", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(&error, HttpError::Response(e) if e.code == 406));
    assert_eq!(error.to_string(), "Not Acceptable");
}

#[tokio::test]
async fn test_html_error_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("<html><body>Bad Gateway</body></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 3);
    let result = client.post::<Value, _>("shop/get", &json!({})).await;

    match result {
        Err(HttpError::Decode(e)) => {
            assert_eq!(e.code, 503);
            assert!(e.body_text().contains("Bad Gateway"));
        }
        other => panic!("Expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_body_of_wrong_shape_is_decode_error() {
    #[derive(Debug, serde::Deserialize)]
    struct Shop {
        #[allow(dead_code)]
        shop_id: u64,
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "shop_id": "abc" })))
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let result = client.post::<Shop, _>("shop/get", &json!({})).await;

    assert!(matches!(result, Err(HttpError::Decode(e)) if e.code == 200));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ShopeeConfig::builder()
        .partner_id(PartnerId::new(PARTNER_ID).unwrap())
        .partner_key(PartnerKey::new(PARTNER_KEY).unwrap())
        .api_url(ApiUrl::new(format!("http://{addr}")).unwrap())
        .retries(3)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let result = client.post::<Value, _>("shop/get", &json!({})).await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancel_aborts_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let client = create_client(&server, 0);
    let request = HttpRequest::builder(HttpMethod::Post, "shop/get")
        .json_body(&json!({}))
        .build()
        .unwrap();

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let result = client
        .request_with_cancel::<Value>(&request, Some(&token))
        .await;
    assert!(matches!(result, Err(HttpError::Cancelled)));
}

#[tokio::test]
async fn test_cancel_interrupts_rate_limit_backoff() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3600"))
        .mount(&server)
        .await;

    let client = create_client(&server, 5);
    let request = HttpRequest::builder(HttpMethod::Post, "items/get")
        .json_body(&json!({}))
        .build()
        .unwrap();

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = client
        .request_with_cancel::<Value>(&request, Some(&token))
        .await;

    assert!(matches!(result, Err(HttpError::Cancelled)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
