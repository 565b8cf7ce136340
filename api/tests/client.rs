//! Integration tests for the HTTP client against a live relay
#![cfg(feature = "server")]

use std::sync::Arc;

use api::{router, AppState, HttpQuoteClient, SEND_MAIL_PATH};
use async_trait::async_trait;
use axum::{http::StatusCode, routing::post, Router};
use oneisok_core::{
    CheckboxVerifier, Email, Field, FieldValue, FormState, MailConfig, MailTransport, RelayError,
    Result, SubmitOutcome,
};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

struct AcceptingTransport;

#[async_trait]
impl MailTransport for AcceptingTransport {
    async fn deliver(&self, _email: &Email, _config: &MailConfig) -> Result<()> {
        Ok(())
    }
}

struct RejectingTransport;

#[async_trait]
impl MailTransport for RejectingTransport {
    async fn deliver(&self, _email: &Email, _config: &MailConfig) -> Result<()> {
        Err(RelayError::Transport("535 auth".to_owned()))
    }
}

fn config() -> MailConfig {
    MailConfig::new()
        .with_account("quotes@oneisok.co")
        .with_secret("secret")
        .with_smtp_host("smtp.invalid")
}

/// Serve `app` on an ephemeral port and return its origin
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn ready_form() -> FormState {
    let mut form = FormState::new();
    form.update_field(Field::Name, FieldValue::from("Asha"));
    form.update_field(Field::Email, FieldValue::from("asha@x.com"));
    form.update_field(Field::Consent, FieldValue::Checked(true));
    form.verify_human(&CheckboxVerifier, "checked");
    form
}

/// Test a delivered request end to end
#[tokio::test]
async fn test_client_reports_delivery() {
    let origin = serve(router(Arc::new(AppState::new(config(), AcceptingTransport)))).await;
    let mut form = ready_form();

    let outcome = form.submit(&HttpQuoteClient::new(origin)).await;

    assert_eq!(outcome, Some(SubmitOutcome::Sent));
    assert_eq!(form.submission().name, "Asha");
}

/// Test that the relay's error text on a 500 reaches the form unchanged
#[tokio::test]
async fn test_client_passes_relay_error_through() {
    let origin = serve(router(Arc::new(AppState::new(config(), RejectingTransport)))).await;
    let mut form = ready_form();

    let outcome = form.submit(&HttpQuoteClient::new(origin)).await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected("Mail transport error: 535 auth".to_owned())
    );
    assert_eq!(
        outcome.message(),
        "Error sending form: Mail transport error: 535 auth"
    );
    assert!(!form.in_flight());
}

/// Test that a 500 without a relay body is treated as a network error
#[tokio::test]
async fn test_client_treats_plain_text_500_as_network_error() {
    let app = Router::new().route(
        SEND_MAIL_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let origin = serve(app).await;
    let mut form = ready_form();

    let outcome = form.submit(&HttpQuoteClient::new(origin)).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(outcome.message(), "Network error.");
}
