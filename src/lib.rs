pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod shutdown;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::Semaphore;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::AppConfig;
use domain::humanize::client::{AiClient, GeminiClient};
use state::AppState;

pub use domain::humanize::client::AiClientTrait;
pub use error::AppError;

/// Overall request deadline, comfortably above the upstream call timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::humanize::handler::humanize_text,
        domain::health::handler::health,
    ),
    components(
        schemas(
            domain::humanize::dto::HumanizeRequest,
            domain::humanize::dto::HumanizeResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "Humanize", description = "Humanização de texto para TTS"),
        (name = "Health", description = "Disponibilidade do serviço")
    )
)]
pub struct ApiDoc;

/// Builds the shared state: upstream client, tag catalog and the
/// outbound-concurrency bound, all derived from configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    // The key may be absent; the service layer refuses to dispatch in
    // that case, so the placeholder client is never exercised.
    let api_key = config.gemini_api_key.clone().unwrap_or_default();
    let ai_client: AiClient = Arc::new(GeminiClient::new(&api_key, &config.gemini_api_base));

    create_app_state_with_client(config, ai_client)
}

fn create_app_state_with_client(config: AppConfig, ai_client: AiClient) -> AppState {
    let tag_catalog = domain::humanize::catalog::load_catalog(&config.tag_catalog_path);

    AppState {
        generation_permits: Arc::new(Semaphore::new(config.max_concurrent_generations)),
        tag_catalog: Arc::new(tag_catalog),
        ai_client,
        config: Arc::new(config),
    }
}

/// Builds the application router with all routes and layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(domain::health::handler::root))
        .route("/health", get(domain::health::handler::health))
        .route("/metrics", get(global::metrics::render))
        .route(
            "/api/humanize-text",
            post(domain::humanize::handler::humanize_text),
        )
        .layer(middleware::from_fn(global::middleware::request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Router with an injected mock client, used by the integration suite.
pub fn create_test_router_with_mock(
    config: AppConfig,
    mock: impl AiClientTrait + 'static,
) -> Router {
    let state = create_app_state_with_client(config, Arc::new(mock));
    create_router(state)
}
