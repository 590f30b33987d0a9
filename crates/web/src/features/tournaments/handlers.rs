use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use storage::{dto::tournament::TournamentSettings, models::Tournament};
use validator::Validate;

use crate::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/tournament/create",
    request_body = TournamentSettings,
    responses(
        (status = 200, description = "Tournament stored, body is the stored document", body = Tournament),
        (status = 400, description = "Empty body, invalid JSON or failed validation"),
        (status = 413, description = "Body larger than the configured limit")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, WebError> {
    let body = body?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WebError::EmptyBody);
    }

    let settings = TournamentSettings::from_slice(&body)?;
    settings.validate()?;

    let tournament = settings.into_tournament();
    let document = services::create_tournament(state.store.as_ref(), &tournament).await?;

    Ok(Json(document).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournament/get/{id}",
    params(
        ("id" = String, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Stored tournament document", body = Tournament),
        (status = 400, description = "No tournament id given"),
        (status = 404, description = "No tournament found with that id")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    if id.trim().is_empty() {
        return Err(WebError::MissingTournamentId);
    }

    let document = services::get_tournament(state.store.as_ref(), &id).await?;

    Ok(Json(document).into_response())
}

/// `/api/tournament/get` with nothing after it.
pub async fn missing_tournament_id() -> WebError {
    WebError::MissingTournamentId
}
