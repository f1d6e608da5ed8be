use std::sync::Arc;

use anyhow::{ensure, Context};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use smartjus_core_lead_contracts::{LeadFeatureService, LeadOutcome, LeadSubmitError};
use tracing::debug;

use super::{error, internal_server_error, MISSING_REQUIRED_FIELDS_MESSAGE};
use crate::models::lead::{ApiLeadAccepted, ApiLeadSubmission};

pub const LEAD_ROUTE: &str = "/api/lead";

pub fn router(service: Arc<impl LeadFeatureService>) -> Router<()> {
    Router::new()
        .route(LEAD_ROUTE, routing::post(submit_lead))
        .with_state(service)
}

async fn submit_lead(
    service: State<Arc<impl LeadFeatureService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let submission = match body.map_err(Into::into).and_then(|body| parse_submission(&body)) {
        Ok(submission) => submission,
        Err(err) => return internal_server_error(err.context("Failed to parse lead submission")),
    };

    match service.submit(submission.into()).await {
        Ok(LeadOutcome { delivered }) => Json(ApiLeadAccepted {
            success: true,
            delivered,
        })
        .into_response(),
        Err(LeadSubmitError::MissingRequiredField(err)) => {
            debug!("rejected lead: {err}");
            error(
                StatusCode::UNPROCESSABLE_ENTITY,
                MISSING_REQUIRED_FIELDS_MESSAGE,
            )
        }
        Err(LeadSubmitError::Other(err)) => internal_server_error(err),
    }
}

/// The body is parsed as json regardless of the content type header.
fn parse_submission(body: &[u8]) -> anyhow::Result<ApiLeadSubmission> {
    let value = serde_json::from_slice::<serde_json::Value>(body).context("Invalid json")?;
    ensure!(value.is_object(), "Expected a json object");
    serde_json::from_value(value).context("Invalid lead submission")
}
