use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, routing::get};
use serde_json::{Value, json};
use storage::TournamentStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod console;
pub mod error;
pub mod features;

/// Largest request body accepted. Bigger bodies get a JSON 413.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TournamentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::get_tournament,
    ),
    components(
        schemas(
            storage::dto::tournament::TournamentSettings,
            storage::models::Tournament,
            storage::models::Participant,
            storage::models::Team,
        )
    ),
    tags(
        (name = "tournaments", description = "Create and fetch tournaments"),
    )
)]
pub struct ApiDoc;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/tournament", features::tournaments::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
