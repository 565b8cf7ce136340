//! Axum routes for the mail relay.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    routing::post,
    Json, Router,
};
use oneisok_core::{relay_submission, MailConfig, MailTransport, RelayResponse, Submission};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::SEND_MAIL_PATH;

/// State shared by the relay handlers
pub struct AppState {
    pub config: MailConfig,
    pub transport: Arc<dyn MailTransport>,
}

impl AppState {
    pub fn new<T: MailTransport + 'static>(config: MailConfig, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }
}

/// Router exposing `POST /api/send-mail`
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(SEND_MAIL_PATH, post(send_mail))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Relay one submission. 200 when delivered, 500 when delivery failed,
/// 400 only when the body is not JSON at all.
async fn send_mail(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<RelayResponse>) {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejecting relay request with invalid JSON: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(RelayResponse::failed(format!("invalid JSON body: {e}"))),
            );
        }
    };

    let submission = Submission::from_json_lenient(&value);
    let response = relay_submission(&submission, &state.config, state.transport.as_ref()).await;

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(response))
}
