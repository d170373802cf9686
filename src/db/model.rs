use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of the `mostrarpeliculas` view. The view resolves the director and
/// category references to display names, so both come back as text.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    #[serde(rename = "PeliculaID")]
    #[sqlx(rename = "PeliculaID")]
    pub pelicula_id: i64,
    #[serde(rename = "Titulo")]
    #[sqlx(rename = "Titulo")]
    pub titulo: String,
    #[serde(rename = "FechaEstreno")]
    #[sqlx(rename = "FechaEstreno")]
    pub fecha_estreno: NaiveDate,
    #[serde(rename = "Presupuesto")]
    #[sqlx(rename = "Presupuesto")]
    pub presupuesto: f64,
    #[serde(rename = "Recaudacion")]
    #[sqlx(rename = "Recaudacion")]
    pub recaudacion: f64,
    #[serde(rename = "Director")]
    #[sqlx(rename = "Director")]
    pub director: String,
    #[serde(rename = "Categoria")]
    #[sqlx(rename = "Categoria")]
    pub categoria: String,
    #[serde(rename = "Duracion")]
    #[sqlx(rename = "Duracion")]
    pub duracion: i32,
    #[serde(rename = "Sinopsis")]
    #[sqlx(rename = "Sinopsis")]
    pub sinopsis: String,
    #[serde(rename = "Poster")]
    #[sqlx(rename = "Poster")]
    pub poster: String,
}

/// Row of the `criticas` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    #[serde(rename = "CriticaID")]
    #[sqlx(rename = "CriticaID")]
    pub critica_id: i64,
    #[serde(rename = "PeliculaID")]
    #[sqlx(rename = "PeliculaID")]
    pub pelicula_id: i64,
    #[serde(rename = "Autor")]
    #[sqlx(rename = "Autor")]
    pub autor: String,
    #[serde(rename = "Puntuacion")]
    #[sqlx(rename = "Puntuacion")]
    pub puntuacion: f64,
    #[serde(rename = "Comentario")]
    #[sqlx(rename = "Comentario")]
    pub comentario: String,
    #[serde(rename = "Fecha")]
    #[sqlx(rename = "Fecha")]
    pub fecha: NaiveDate,
}

/// Row of the `mostraractoresporpelicula` view.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActorAppearance {
    #[serde(rename = "PeliculaID")]
    #[sqlx(rename = "PeliculaID")]
    pub pelicula_id: i64,
    #[serde(rename = "ActorID")]
    #[sqlx(rename = "ActorID")]
    pub actor_id: i64,
    #[serde(rename = "Nombre")]
    #[sqlx(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Personaje")]
    #[sqlx(rename = "Personaje")]
    pub personaje: String,
}

/// The nine movie fields as passed to `AgregarPelicula` / `ActualizarPelicula`.
///
/// Every field is optional: inserts bind missing fields as NULL, while the
/// update handler requires all of them before calling the procedure.
#[derive(Debug, Clone, Default)]
pub struct MovieFields {
    pub titulo: Option<String>,
    pub fecha_estreno: Option<String>,
    pub presupuesto: Option<f64>,
    pub recaudacion: Option<f64>,
    pub director: Option<i64>,
    pub categoria: Option<i64>,
    pub duracion: Option<i64>,
    pub sinopsis: Option<String>,
    pub poster: Option<String>,
}

/// A validated review, ready for `AgregarCritica`.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub pelicula_id: i64,
    pub autor: String,
    pub puntuacion: f64,
    pub comentario: String,
    pub fecha: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type DbResult<T> = Result<T, DbError>;
