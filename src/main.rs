use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use dex_router::config::RouterConfig;
use dex_router::core::engine::QuoteEngine;
use dex_router::core::registry::PoolSnapshot;
use dex_router::orchestrator::{get_router_quote, load_snapshot};
use dex_router::types::{QuoteRequest, QuoteResponse, ResponsePool};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct RouterState {
    config: Arc<RouterConfig>,
    snapshot: Arc<RwLock<PoolSnapshot>>,
    engine: Arc<QuoteEngine>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_quote, update_pool_data),
    components(schemas(QuoteRequest, QuoteResponse, ResponsePool)),
    tags(
        (name = "quotes", description = "Best-trade quotes for a token pair")
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/quote",
    params(QuoteRequest),
    responses(
        (status = 200, description = "Best trade for the requested pair", body = QuoteResponse),
        (status = 404, description = "Insufficient liquidity for this trade"),
        (status = 400, description = "Invalid quote request")
    ),
    tag = "quotes"
)]
async fn get_quote(
    State(state): State<RouterState>,
    Query(params): Query<QuoteRequest>,
) -> Result<Json<QuoteResponse>, (StatusCode, String)> {
    let snapshot = state.snapshot.read().await;
    match get_router_quote(&state.config, &snapshot, &state.engine, &params) {
        Ok(Some(response)) => Ok(Json(response)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            "insufficient liquidity for this trade".to_string(),
        )),
        Err(err) => Err((StatusCode::BAD_REQUEST, format!("{err:#}"))),
    }
}

#[utoipa::path(
    post,
    path = "/update_pool_data",
    responses(
        (status = 200, description = "Pool snapshot reloaded from the working directory"),
        (status = 500, description = "Snapshot could not be read")
    ),
    tag = "quotes"
)]
async fn update_pool_data(
    State(state): State<RouterState>,
) -> Result<StatusCode, (StatusCode, String)> {
    let fresh = load_snapshot(&state.config)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}")))?;
    tracing::info!(
        pools = fresh.len(),
        block_number = fresh.block_number,
        "pool snapshot reloaded"
    );
    *state.snapshot.write().await = fresh;
    Ok(StatusCode::OK)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = RouterConfig::load_from(PathBuf::from("router_config.toml"))?;
    let snapshot = match load_snapshot(&config) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!("starting with empty pool snapshot: {err:#}");
            PoolSnapshot::default()
        }
    };

    let state = RouterState {
        config: Arc::new(config),
        snapshot: Arc::new(RwLock::new(snapshot)),
        engine: Arc::new(QuoteEngine::new()),
    };

    let openapi = ApiDoc::openapi();
    let app = Router::new()
        .route("/quote", get(get_quote))
        .route("/update_pool_data", post(update_pool_data))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("server running on http://localhost:3000");
    axum::serve(listener, app).await?;
    Ok(())
}
