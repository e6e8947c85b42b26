use crate::error::AppError;
use crate::state::AppState;

use super::dto::{HumanizeRequest, HumanizeResponse};
use super::prompt;

/// Composes the prompt for one request and dispatches it upstream.
///
/// The API key presence is checked before anything else: a missing key
/// must never produce an outbound call. Outbound calls hold a semaphore
/// permit so a burst of requests cannot flood the generation API.
pub async fn humanize_text(
    state: &AppState,
    request: &HumanizeRequest,
) -> Result<HumanizeResponse, AppError> {
    if state.config.gemini_api_key.is_none() {
        return Err(AppError::MissingApiKey);
    }

    let prompt = prompt::compose_prompt(request, &state.tag_catalog);

    tracing::debug!(prompt_length = prompt.len(), "Prompt composed");

    let _permit = state
        .generation_permits
        .acquire()
        .await
        .map_err(|_| AppError::Internal("generation semaphore closed".to_string()))?;

    let generated = state.ai_client.generate(&prompt).await?;

    Ok(HumanizeResponse::new(generated.trim().to_string()))
}
