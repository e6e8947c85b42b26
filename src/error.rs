use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload shared by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for errors
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error description
    #[schema(example = "O campo 'text' é obrigatório e não pode estar vazio.")]
    pub error: String,
}

/// Application-wide error type.
///
/// Upstream failures deliberately collapse into a single variant: the
/// caller cannot act differently on quota, network or content-policy
/// errors, so they all map to the same 500 with the underlying message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Requisição inválida: {0}")]
    Validation(String),

    #[error("Corpo JSON inválido: {0}")]
    JsonParse(String),

    #[error("GEMINI_API_KEY não está configurada no servidor.")]
    MissingApiKey,

    #[error("Erro na API de geração: {0}")]
    Upstream(String),

    #[error("Erro interno: {0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::JsonParse(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::Upstream(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::warn!(error = %message, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParse(rejection.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
