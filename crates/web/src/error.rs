use axum::{
    Json,
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use storage::models::DocumentError;
use validator::ValidationErrors;

pub const INVALID_TOURNAMENT_JSON: &str = "invalid tournament JSON";
pub const NO_TOURNAMENT_ID: &str = "no tournament id given";
pub const TOURNAMENT_NOT_FOUND: &str = "no tournament found with that id";

/// Web layer errors. Every variant renders as a JSON body with an `error` key.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Document(DocumentError),
    Validation(ValidationErrors),
    EmptyBody,
    MissingTournamentId,
    /// An extractor turned the request down before the handler ran.
    Rejected { status: StatusCode, message: String },
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Document(e) => write!(f, "Document error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::EmptyBody => write!(f, "Empty request body"),
            Self::MissingTournamentId => write!(f, "Missing tournament id"),
            Self::Rejected { status, message } => write!(f, "Rejected ({}): {}", status, message),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Document(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::EmptyBody => StatusCode::BAD_REQUEST,
            Self::MissingTournamentId => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
        };

        let body = match &self {
            Self::Storage(e) if e.is_not_found() => {
                json!({
                    "error": TOURNAMENT_NOT_FOUND
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Document(e) => {
                json!({
                    "error": INVALID_TOURNAMENT_JSON,
                    "details": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                client_field_name(field),
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::EmptyBody => {
                json!({
                    "error": INVALID_TOURNAMENT_JSON
                })
            }
            Self::MissingTournamentId => {
                json!({
                    "error": NO_TOURNAMENT_ID
                })
            }
            Self::Rejected { message, .. } => {
                json!({
                    "error": message
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<BytesRejection> for WebError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Request bodies use camelCase keys; validator reports the Rust field name.
fn client_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }

    name
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<DocumentError> for WebError {
    fn from(error: DocumentError) -> Self {
        Self::Document(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
