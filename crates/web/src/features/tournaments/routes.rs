use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_tournament, get_tournament, missing_tournament_id};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_tournament))
        .route("/get", get(missing_tournament_id))
        .route("/get/", get(missing_tournament_id))
        .route("/get/:id", get(get_tournament))
}
