//! Integration tests for the relay routes
#![cfg(feature = "server")]

use std::sync::{Arc, Mutex};

use api::{router, AppState};
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use oneisok_core::{Email, MailConfig, MailTransport, RelayError, RelayResponse, Result};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tower::ServiceExt;

#[derive(Clone, Default)]
struct RecordingTransport {
    sent: Arc<Mutex<Vec<Email>>>,
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn deliver(&self, email: &Email, _config: &MailConfig) -> Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn deliver(&self, _email: &Email, _config: &MailConfig) -> Result<()> {
        Err(RelayError::Transport("connection reset by peer".to_owned()))
    }
}

fn config() -> MailConfig {
    MailConfig::new()
        .with_account("quotes@oneisok.co")
        .with_secret("secret")
        .with_smtp_host("smtp.invalid")
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/send-mail")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> RelayResponse {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

const ASHA: &str = r#"{"name":"Asha","email":"asha@x.com","phone":"555","address":"1 Rd","service":"seo","budget":"under-5k","priority":"Urgent","launchDate":"2025-01-01","comments":"hi"}"#;

/// Test the example request against a working transport
#[tokio::test]
async fn test_send_mail_success() {
    let transport = RecordingTransport::default();
    let app = router(Arc::new(AppState::new(config(), transport.clone())));

    let response = app.oneshot(post(ASHA)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], br#"{"success":true}"#);

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("Name: Asha"));
    assert!(sent[0].body.contains("Priority: Urgent"));
}

/// Test that a transport failure maps to 500 with an error message
#[tokio::test]
async fn test_send_mail_transport_failure() {
    let app = router(Arc::new(AppState::new(config(), FailingTransport)));

    let response = app.oneshot(post(ASHA)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert!(!body.success);
    assert!(body.error.is_some_and(|e| e.contains("connection reset by peer")));
}

/// Test that missing credentials surface through the same 500 contract
#[tokio::test]
async fn test_send_mail_unconfigured() {
    let transport = RecordingTransport::default();
    let app = router(Arc::new(AppState::new(MailConfig::new(), transport.clone())));

    let response = app.oneshot(post(ASHA)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!read_json(response).await.success);
    assert!(transport.sent.lock().unwrap().is_empty());
}

/// Test that partial and oddly typed payloads are still relayed
#[rstest]
#[case("{}")]
#[case(r#"{"name":"Asha"}"#)]
#[case(r#"{"name":42,"consent":"yes","extra":[1,2]}"#)]
#[case("[]")]
#[tokio::test]
async fn test_send_mail_is_permissive(#[case] body: &str) {
    let transport = RecordingTransport::default();
    let app = router(Arc::new(AppState::new(config(), transport.clone())));

    let response = app.oneshot(post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(transport.sent.lock().unwrap().len(), 1);
}

/// Test that a body that is not JSON is refused without sending mail
#[tokio::test]
async fn test_send_mail_rejects_non_json() {
    let transport = RecordingTransport::default();
    let app = router(Arc::new(AppState::new(config(), transport.clone())));

    let response = app.oneshot(post("name=Asha")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!read_json(response).await.success);
    assert!(transport.sent.lock().unwrap().is_empty());
}

/// Test that only POST is routed
#[tokio::test]
async fn test_get_is_not_allowed() {
    let app = router(Arc::new(AppState::new(config(), FailingTransport)));

    let request = Request::builder()
        .uri("/api/send-mail")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
