use std::env;

/// Default OpenAI-compatible endpoint of the Gemini API.
pub const DEFAULT_GEMINI_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

/// Application configuration, loaded once at startup and shared
/// read-only with every request handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// Upstream credential. Absence is not fatal at startup: the
    /// humanize endpoint answers 500 until the key is configured.
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub tag_catalog_path: String,
    /// Upper bound on simultaneous upstream generation calls.
    pub max_concurrent_generations: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty());

        if gemini_api_key.is_none() {
            tracing::warn!(
                "GEMINI_API_KEY não está configurada. /api/humanize-text responderá 500 até que a chave seja definida."
            );
        }

        Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gemini_api_key,
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            tag_catalog_path: env::var("TAG_CATALOG_PATH")
                .unwrap_or_else(|_| "tags.json".to_string()),
            max_concurrent_generations: env::var("MAX_CONCURRENT_GENERATIONS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8),
        }
    }
}
