use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::db::DbError;

/// Movie fields as they appear on the wire for POST/PUT /Peliculas.
/// All optional: inserts pass missing fields through as NULL, updates
/// require the full set (checked in `validate`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieBody {
    pub titulo: Option<String>,
    #[serde(rename = "fechaEstreno")]
    pub fecha_estreno: Option<String>,
    pub presupuesto: Option<f64>,
    pub recaudacion: Option<f64>,
    pub director: Option<i64>,
    pub categoria: Option<i64>,
    pub duracion: Option<i64>,
    pub sinopsis: Option<String>,
    pub poster: Option<String>,
}

/// Raw review body for POST /Criticas. Fields stay untyped JSON values so
/// validation can report every offending field by name instead of failing
/// at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewBody {
    #[serde(rename = "PeliculaID")]
    pub pelicula_id: Option<Value>,
    #[serde(rename = "Autor")]
    pub autor: Option<Value>,
    #[serde(rename = "Puntuacion")]
    pub puntuacion: Option<Value>,
    #[serde(rename = "Comentario")]
    pub comentario: Option<Value>,
    #[serde(rename = "Fecha")]
    pub fecha: Option<Value>,
}

/// One entry of the `errors` array on a 400 validation response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub msg: String,
    pub path: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationError {
    pub fn field(path: &str, value: Option<&Value>) -> Self {
        Self {
            msg: "Invalid value".to_string(),
            path: path.to_string(),
            location: "body".to_string(),
            value: value.cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Outcome of a stored procedure call, returned as the `data` field of
/// mutation responses.
#[derive(Debug, Serialize)]
pub struct ProcedureOutcome {
    #[serde(rename = "rowsAffected")]
    pub rows_affected: u64,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: String,
    pub data: ProcedureOutcome,
}

impl MutationResponse {
    pub fn new(message: &str, rows_affected: u64) -> Self {
        Self {
            message: message.to_string(),
            data: ProcedureOutcome { rows_affected },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("validation failed")]
    Validation(Vec<ValidationError>),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::new(&message)),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(&message))).into_response()
            }
            // Single-row lookups surface missing rows as 404.
            ApiError::Database(DbError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("Película no encontrada")),
            )
                .into_response(),
            ApiError::Database(err) => {
                // Raw driver errors go to the log, never to the client.
                error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("Error en la base de datos")),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
