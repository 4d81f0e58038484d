use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use shared::{
    domain::WordId,
    protocol::{
        ServiceInfo, ValidateSentenceRequest, ValidationResult, VocabularyEntry,
        VALIDATE_SENTENCE_ROUTE,
    },
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing::{info, warn};

mod api;
mod app_state;
mod config;
mod scoring;
mod vocabulary;

use api::{ApiContext, ApiFailure};
use app_state::AppState;
use config::load_settings;
use vocabulary::VocabularyCatalog;

const MAX_REQUEST_BYTES: usize = 16 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let catalog = VocabularyCatalog::seeded();
    info!(words = catalog.len(), "vocabulary catalog loaded");

    let state = AppState {
        api: ApiContext {
            catalog: Arc::new(catalog),
        },
    };
    let app = build_router(Arc::new(state), &settings.allowed_origins);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "scoring service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route(VALIDATE_SENTENCE_ROUTE, post(http_validate_sentence))
        .route("/api/vocabulary/:word_id", get(http_vocabulary))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to Daily Vocab API".into(),
        docs: "/docs".into(),
        api_endpoint: VALIDATE_SENTENCE_ROUTE.into(),
    })
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_validate_sentence(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateSentenceRequest>,
) -> Result<Json<ValidationResult>, ApiFailure> {
    api::validate_sentence(&state.api, &req).map(Json)
}

async fn http_vocabulary(
    State(state): State<Arc<AppState>>,
    Path(word_id): Path<i64>,
) -> Result<Json<VocabularyEntry>, ApiFailure> {
    api::vocabulary_entry(&state.api, WordId(word_id)).map(Json)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
