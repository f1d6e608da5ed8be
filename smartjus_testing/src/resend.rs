//! Minimal stand-in for the Resend email api.
//!
//! Accepted emails are kept in an in-memory [`Outbox`] which can be inspected
//! via `GET /emails` and cleared via `DELETE /emails`.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use uuid::Uuid;

pub const EMAILS_ROUTE: &str = "/emails";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Resend endpoint: http://{host}:{port}");
    info!("API key: {api_key:?}");

    let (router, _) = router(api_key);

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// Start the testing server on a random local port in the background.
///
/// Returns the base url of the server and its outbox.
pub async fn spawn(api_key: impl Into<String>) -> anyhow::Result<(String, Outbox)> {
    let (router, outbox) = router(api_key.into());

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to random local port")?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok((format!("http://{addr}"), outbox))
}

pub fn router(api_key: String) -> (Router<()>, Outbox) {
    let outbox = Outbox::default();
    let state = Arc::new(ServerState {
        api_key,
        outbox: outbox.clone(),
    });

    let router = Router::new()
        .route(
            EMAILS_ROUTE,
            routing::post(send_email)
                .get(list_emails)
                .delete(clear_emails),
        )
        .with_state(state);

    (router, outbox)
}

#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<ReceivedEmail>>>);

impl Outbox {
    pub async fn emails(&self) -> Vec<ReceivedEmail> {
        self.0.lock().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedEmail {
    pub id: Uuid,
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    pub reply_to: Option<String>,
}

struct ServerState {
    api_key: String,
    outbox: Outbox,
}

#[derive(Deserialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: Option<String>,
    html: Option<String>,
    reply_to: Option<String>,
}

#[derive(Serialize)]
struct SendEmailResponse {
    id: Uuid,
}

#[derive(Serialize)]
struct ErrorResponse {
    name: &'static str,
    message: &'static str,
}

async fn send_email(
    state: State<Arc<ServerState>>,
    headers: HeaderMap,
    Json(request): Json<SendEmailRequest>,
) -> Response {
    if !authorized(&state, &headers) {
        return error(StatusCode::UNAUTHORIZED, "invalid_api_key", "API key is invalid");
    }

    if request.to.is_empty() || (request.text.is_none() && request.html.is_none()) {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            "Missing recipient or body",
        );
    }

    let email = ReceivedEmail {
        id: Uuid::new_v4(),
        from: request.from,
        to: request.to,
        subject: request.subject,
        text: request.text,
        html: request.html,
        reply_to: request.reply_to,
    };
    info!(id = %email.id, to = ?email.to, subject = %email.subject, "received email");

    let id = email.id;
    state.outbox.0.lock().await.push(email);

    Json(SendEmailResponse { id }).into_response()
}

async fn list_emails(state: State<Arc<ServerState>>) -> Json<Vec<ReceivedEmail>> {
    Json(state.outbox.emails().await)
}

async fn clear_emails(state: State<Arc<ServerState>>) -> StatusCode {
    state.outbox.0.lock().await.clear();
    StatusCode::NO_CONTENT
}

fn authorized(state: &ServerState, headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| key == state.api_key)
}

fn error(status: StatusCode, name: &'static str, message: &'static str) -> Response {
    (status, Json(ErrorResponse { name, message })).into_response()
}
