use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

use super::dto::{HumanizeRequest, HumanizeResponse};
use super::service;

/// Reescreve um texto inserindo tags de emoção e estilo para TTS.
#[utoipa::path(
    post,
    path = "/api/humanize-text",
    tag = "Humanize",
    request_body = HumanizeRequest,
    responses(
        (status = 200, description = "Texto humanizado com sucesso", body = HumanizeResponse),
        (status = 400, description = "Requisição inválida", body = crate::error::ErrorResponse),
        (status = 500, description = "Erro de configuração ou na API de geração", body = crate::error::ErrorResponse)
    )
)]
pub async fn humanize_text(
    State(state): State<AppState>,
    request: Result<Json<HumanizeRequest>, JsonRejection>,
) -> Result<Json<HumanizeResponse>, AppError> {
    // Malformed JSON becomes a 400 before the composer ever runs.
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        text_length = request.text.len(),
        humanization_level = request.humanization_level,
        "Humanize request received"
    );

    request.validate()?;

    let response = service::humanize_text(&state, &request).await?;

    tracing::info!(
        humanized_length = response.humanized_text.len(),
        "Text humanized successfully"
    );

    Ok(Json(response))
}
