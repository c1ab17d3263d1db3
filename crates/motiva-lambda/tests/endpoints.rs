use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use motiva_lambda::build_router;
use motiva_lambda::state::AppState;
use motiva_payments::client::StripeClient;

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Router whose provider calls always fail: the client points at an
/// unroutable local port.
fn unreachable_provider_router() -> axum::Router {
    let client = StripeClient::with_base_url("sk_test_dummy", "http://127.0.0.1:9");
    build_router(AppState::with_client(client))
}

/// Serve a canned provider on an ephemeral port; returns its base URL.
async fn spawn_provider_stub(stub: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, stub).await.expect("serve stub");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_answers_ok() {
    let app = build_router(AppState::unconfigured());

    let response = app.oneshot(get("/health")).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status").and_then(Value::as_str), Some("ok"));
}

#[tokio::test]
async fn questions_route_serves_the_whole_bank() {
    let app = build_router(AppState::unconfigured());

    let response = app
        .oneshot(get("/questions"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let questions = payload
        .get("questions")
        .and_then(Value::as_array)
        .expect("questions array");
    assert_eq!(questions.len(), 21);
    assert_eq!(
        questions[0].get("id").and_then(Value::as_str),
        Some("q1")
    );
    assert!(questions[0].get("driver_label").is_some());

    let scale = payload
        .get("scale")
        .and_then(Value::as_array)
        .expect("scale array");
    assert_eq!(scale.len(), 5);
}

#[tokio::test]
async fn verify_payment_requires_email() {
    let app = build_router(AppState::unconfigured());

    let response = app
        .oneshot(get("/verify-payment"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Email parameter is required")
    );
}

#[tokio::test]
async fn verify_payment_rejects_blank_email() {
    let app = build_router(AppState::unconfigured());

    let response = app
        .oneshot(get("/verify-payment?email=%20%20"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_secret_key_is_a_generic_config_error() {
    let app = build_router(AppState::unconfigured());

    let response = app
        .oneshot(get("/verify-payment?email=buyer@example.com"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Server configuration error")
    );
    assert!(payload.get("paid").is_none());
}

#[tokio::test]
async fn no_matching_charge_is_a_successful_unpaid_answer() {
    let stub = axum::Router::new().route(
        "/v1/charges",
        axum::routing::get(|| async {
            axum::Json(serde_json::json!({
                "object": "list",
                "data": [],
                "has_more": false
            }))
        }),
    );
    let base = spawn_provider_stub(stub).await;

    let client = StripeClient::with_base_url("sk_test_dummy", base);
    let app = build_router(AppState::with_client(client));

    let response = app
        .oneshot(get("/verify-payment?email=stranger@example.com"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("paid").and_then(Value::as_bool), Some(false));
    assert!(payload.get("error").is_none());
}

#[tokio::test]
async fn paid_session_resolves_with_customer_email() {
    let stub = axum::Router::new().route(
        "/v1/checkout/sessions/{id}",
        axum::routing::get(|| async {
            axum::Json(serde_json::json!({
                "id": "cs_test_123",
                "payment_status": "paid",
                "customer_details": { "email": "buyer@example.com" },
                "customer_email": null
            }))
        }),
    );
    let base = spawn_provider_stub(stub).await;

    let client = StripeClient::with_base_url("sk_test_dummy", base);
    let app = build_router(AppState::with_client(client));

    let response = app
        .oneshot(get("/verify-session?session_id=cs_test_123"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("paid").and_then(Value::as_bool), Some(true));
    assert_eq!(
        payload.get("email").and_then(Value::as_str),
        Some("buyer@example.com")
    );
}

#[tokio::test]
async fn provider_failure_fails_closed_for_email_lookup() {
    let app = unreachable_provider_router();

    let response = app
        .oneshot(get("/verify-payment?email=buyer@example.com"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Failed to verify payment")
    );
    assert_eq!(payload.get("paid").and_then(Value::as_bool), Some(false));
}

#[tokio::test]
async fn verify_session_requires_session_id() {
    let app = build_router(AppState::unconfigured());

    let response = app
        .oneshot(get("/verify-session"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Session ID parameter is required")
    );
}

#[tokio::test]
async fn provider_failure_fails_closed_for_session_lookup() {
    let app = unreachable_provider_router();

    let response = app
        .oneshot(get("/verify-session?session_id=cs_test_123"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("paid").and_then(Value::as_bool), Some(false));
}

#[tokio::test]
async fn preflight_is_open_to_any_origin() {
    let app = build_router(AppState::unconfigured());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/verify-payment")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = build_router(AppState::unconfigured());

    let response = app.oneshot(get("/nope")).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
