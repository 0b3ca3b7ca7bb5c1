use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

mod catalog;
mod config;
mod error;
mod handlers;
mod llm;
mod models;
mod random;
mod seed;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::llm::{GeminiClient, LlmClient};
use crate::random::{RandomSource, StdRandom};

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub rng: Arc<dyn RandomSource>,
    /// `None` when no credential is configured; chat then answers offline.
    pub llm: Option<Arc<dyn LlmClient>>,
    pub llm_timeout: Duration,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,setu_backend=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Setu AI backend starting");
    info!(data_dir = %config.data_dir.display(), "Using catalog directory");

    let seeded = seed::seed_missing(&config.data_dir).await?;
    if !seeded.is_empty() {
        info!(files = ?seeded, "Demo catalog written for missing files");
    }

    let llm_timeout = Duration::from_secs(config.llm_timeout_secs);
    let llm: Option<Arc<dyn LlmClient>> = match &config.llm_api_key {
        Some(key) => {
            info!(model = %config.llm_model, timeout_secs = config.llm_timeout_secs, "LLM chat enabled");
            let mut client = GeminiClient::new(key.clone(), config.llm_model.clone(), llm_timeout)?;
            if let Some(base_url) = &config.llm_base_url {
                client = client.with_base_url(base_url.clone());
            }
            Some(Arc::new(client) as Arc<dyn LlmClient>)
        }
        None => {
            warn!("GOOGLE_GENAI_API_KEY not set; /chat-llm runs in offline mode");
            None
        }
    };

    let state = AppState {
        catalog: CatalogStore::new(config.data_dir.clone()),
        rng: Arc::new(StdRandom::from_entropy()),
        llm,
        llm_timeout,
    };

    let app = build_router(state).layer(cors_layer(&config.cors_origins));

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Status ──────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/products", get(handlers::products::list_products))
        .route("/products/:id", get(handlers::products::get_product))
        .route("/user/:user_id", get(handlers::users::get_user_profile))

        // ── Agents ──────────────────────────────────────────────────────────
        .route("/recommend", post(handlers::recommend::recommend_products))
        .route("/inventory", post(handlers::inventory::check_inventory))
        .route("/checkout", post(handlers::checkout::process_checkout))
        .route("/apply-loyalty", post(handlers::loyalty::apply_loyalty_discount))
        .route("/fulfillment", post(handlers::fulfillment::process_fulfillment))
        .route("/virtual-tryon-mock", post(handlers::tryon::virtual_tryon))
        .route("/chat-llm", post(handlers::chat::chat_llm))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
