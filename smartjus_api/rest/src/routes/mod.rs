use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod lead;

pub const MISSING_REQUIRED_FIELDS_MESSAGE: &str = "Campos obrigatórios ausentes.";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Erro ao processar o lead.";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_SERVER_ERROR_MESSAGE,
    )
}

fn error(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiError {
            success: false,
            error: message,
        }),
    )
        .into_response()
}
