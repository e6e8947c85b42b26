use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_humanization_level() -> i32 {
    3
}

/// Request body for POST /api/humanize-text.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct HumanizeRequest {
    /// Source text to rewrite with emotion and style tags.
    #[validate(length(min = 1, message = "O campo 'text' é obrigatório e não pode estar vazio."))]
    #[schema(example = "Olá, tudo bem com você?")]
    pub text: String,

    /// Requested tag frequency/intensity, nominally 0-5. The value is
    /// interpolated into the prompt as-is; out-of-range values are not
    /// clamped.
    #[serde(default = "default_humanization_level")]
    #[schema(example = 3)]
    pub humanization_level: i32,

    #[serde(default)]
    pub add_pauses: bool,

    #[serde(default)]
    pub add_emphasis: bool,

    #[serde(default)]
    pub add_hesitations: bool,

    #[serde(default)]
    pub add_conversational: bool,

    #[serde(default)]
    pub add_breathing: bool,

    #[serde(default)]
    pub add_smiling_tone: bool,
}

/// Success envelope for POST /api/humanize-text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HumanizeResponse {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,

    /// Generated text with the inserted tags
    #[schema(example = "<breath> Olá, <joy> tudo bem com você?")]
    pub humanized_text: String,
}

impl HumanizeResponse {
    pub fn new(humanized_text: String) -> Self {
        Self {
            success: true,
            humanized_text,
        }
    }
}
