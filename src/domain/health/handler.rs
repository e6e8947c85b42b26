/// Static liveness string served at the root route.
pub async fn root() -> &'static str {
    "Humanizer API está no ar."
}

/// Health probe, static by contract.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Serviço disponível", body = String))
)]
pub async fn health() -> &'static str {
    "OK"
}
